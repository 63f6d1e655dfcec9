//! Prompts sent to the text-generation model.

use tubegen_models::VideoStyle;

/// System instruction fixing the writer persona and output language.
pub const SYSTEM_PROMPT: &str = "You are a creative video script writer for YouTube faceless videos. Generate engaging, informative content in Hindi/Hinglish.";

/// Sampling temperature for script requests.
pub const TEMPERATURE: f32 = 0.8;

/// Upper bound on generated tokens per script.
pub const MAX_TOKENS: u32 = 1000;

/// Writing instruction for a style.
pub fn style_instruction(style: VideoStyle) -> &'static str {
    match style {
        VideoStyle::Facts => "रोचक तथ्यों के साथ एक जानकारीपूर्ण स्क्रिप्ट बनाएं",
        VideoStyle::Story => "एक आकर्षक कहानी के रूप में स्क्रिप्ट लिखें",
        VideoStyle::Motivation => "प्रेरणादायक और उत्साहवर्धक स्क्रिप्ट तैयार करें",
        VideoStyle::Educational => "शैक्षिक और सीखने योग्य सामग्री के साथ स्क्रिप्ट बनाएं",
        VideoStyle::Entertainment => "मनोरंजक और आकर्षक स्क्रिप्ट लिखें",
    }
}

/// Build the user prompt asking for a labeled title, description and script.
pub fn build_script_prompt(topic: &str, style: VideoStyle) -> String {
    format!(
        r#"
विषय: {topic}
स्टाइल: {instruction}

कृपया एक YouTube faceless video के लिए 2-3 मिनट की स्क्रिप्ट बनाएं। निम्नलिखित प्रारूप में दें:

शीर्षक: [एक आकर्षक शीर्षक]
विवरण: [वीडियो का संक्षिप्त विवरण]
स्क्रिप्ट: [पूरी वीडियो स्क्रिप्ट हिंदी/हिंग्लिश में]

स्क्रिप्ट engaging, informative और दर्शकों को engaged रखने वाली होनी चाहिए।
"#,
        topic = topic,
        instruction = style_instruction(style),
    )
}
