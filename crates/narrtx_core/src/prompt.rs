//! Instruction prompt for the cleaning model.

/// Builds the cleaning prompt with `text` embedded verbatim.
///
/// The model is told to repair or drop gibberish, answer with the cleaned
/// text only, and answer `UNREADABLE` when nothing can be salvaged.
pub fn cleaning_prompt(text: &str) -> String {
    format!(
        "Analyze the following text and perform these tasks:\n\
         1. Identify and replace any gibberish or non-English words with matching english words or if unreadable remove the word.\n\
         2. Return only the cleaned, readable English text\n\
         3. If the text is mostly gibberish or unreadable, return \"UNREADABLE\"\n\
         4. Do not include any explanations or additional text, only return the cleaned text or \"UNREADABLE\".\n\
         \n\
         Text to analyze:\n\
         \"{text}\"\n\
         \n\
         Cleaned text (or UNREADABLE):"
    )
}
