use serde::Serialize;

/// Dashboard pages. The visit log itself accepts any name; this enum is
/// what the CLI records on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    Home,
    Monitor,
    About,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Monitor => "Monitor",
            Page::About => "About",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🔍",
            Page::Monitor => "📊",
            Page::About => "🎉",
        }
    }
}
