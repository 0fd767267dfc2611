pub fn render() -> String {
    let mut out = String::new();
    out.push_str("🎉 Welcome to the Emotion Detection in Text App!\n");
    out.push_str(
        "Analyze and visualize emotional content hidden within text with an enhanced interface.\n",
    );
    out
}
