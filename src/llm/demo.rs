//! Offline sample responses used when no API key is configured.

const DEMO_STORY: &str = "\
🌾 किसान राजू की कहानी (Farmer Raju's Story)
===============================

एक छोटे से गाँव में राजू नाम का एक मेहनती किसान रहता था।
राजू जानता था कि अलग-अलग मिट्टी में अलग-अलग फसलें उगती हैं:
• काली मिट्टी - कपास
• लाल मिट्टी - मूंगफली
• दोमट मिट्टी - गेहूं और चावल

शिक्षा: प्रकृति के नियमों को समझना और उनका सम्मान करना जरूरी है।

English: Farmer Raju teaches his son which crops suit which soil.
";

const DEMO_POEM: &str = "\
🌧️ बारिश का गीत (Song of Rain)
========================

आया आया मेघ राजा,
काले बादल लेके आया।
पानी बरसे छम छम छम,
खुशी मनाते हम हम हम।

English: A joyful poem about the monsoon and the happiness it brings to farmers.
";

const DEMO_EXPLANATION: &str = "\
🌱 पेड़-पौधे कैसे खाना बनाते हैं? (How do plants make food?)
================================================

1. 🍃 पत्तियां सूरज की रोशनी लेती हैं
2. 💧 जड़ें पानी सोखती हैं
3. 🌬️ पत्तियां हवा से CO2 लेती हैं
4. ✨ सब मिलकर खाना (ग्लूकोज) बनता है

यह रसोई जैसा है: सूरज = चूल्हा, पत्तियां = रसोइया।

English: Photosynthesis explained through a familiar kitchen.
";

const DEMO_IMAGE_ANALYSIS: &str = "\
📸 Image Analysis Result
=======================

This appears to be a textbook page with educational content.

For Class 1: matching exercises and colour-and-identify activities.
For Class 2: fill in the blanks and true/false questions.
For Class 3: short answer questions and drawing-and-labelling tasks.

Note: set GEMINI_API_KEY to analyse the actual image.
";

/// Pick a canned response for a text prompt.
pub fn demo_content(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    if prompt.contains("story") || prompt.contains("कहानी") {
        DEMO_STORY
    } else if prompt.contains("poem") || prompt.contains("कविता") {
        DEMO_POEM
    } else {
        DEMO_EXPLANATION
    }
}

/// Canned response for an image prompt.
pub fn demo_image_content() -> &'static str {
    DEMO_IMAGE_ANALYSIS
}
