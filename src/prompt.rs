//! The interview-analysis prompt template.
//!
//! Downstream consumers parse the model's reply by the section headers in
//! this template, so its wording, ordering, and bullets are fixed.

/// Section headers the model is asked to produce, in order.
pub const SECTION_HEADERS: [&str; 6] = [
    "Interview Overview",
    "Candidate Background",
    "Interview Highlights",
    "Interview Tone and Communication",
    "Interviewer's Perspective",
    "Key Takeaways",
];

/// Everything before the transcript.
const PROMPT_PREAMBLE: &str = r"Analyze the following interview transcript and provide a comprehensive, structured summary with the following sections:

1. Interview Overview
   - Candidate Name (if mentioned)
   - Position/Role Applied For
   - Interview Type (Technical, Behavioral, etc.)

2. Candidate Background
   - Key Professional Experiences
   - Educational Qualifications
   - Relevant Skills Highlighted

3. Interview Highlights
   - Significant Discussion Points
   - Technical or Role-Specific Questions and Answers
   - Candidate's Strengths
   - Areas of Potential Development

4. Interview Tone and Communication
   - Candidate's Communication Style
   - Confidence Level
   - Depth of Responses

5. Interviewer's Perspective
   - Key Observations
   - Potential Fit for the Role
   - Notable Reactions or Comments

6. Key Takeaways
   - Overall Impression
   - Recommendation or Next Steps

Transcript:
";

/// Everything after the transcript.
const PROMPT_CLOSING: &str = r"

Provide insights and observations based on the conversation, maintaining objectivity and focusing on professional assessment.";

/// Builds the analysis prompt for a transcript.
///
/// The transcript is inserted verbatim, once, with no escaping or length
/// limit.
///
/// # Examples
///
/// ```
/// use interview_analyzer::prompt::{SECTION_HEADERS, build_prompt};
///
/// let prompt = build_prompt("Q: Why us? A: The mission.");
/// assert!(prompt.contains("Transcript:\nQ: Why us? A: The mission.\n"));
/// assert!(SECTION_HEADERS.iter().all(|h| prompt.contains(h)));
/// ```
#[must_use]
pub fn build_prompt(transcript: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_PREAMBLE.len() + transcript.len() + PROMPT_CLOSING.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(transcript);
    prompt.push_str(PROMPT_CLOSING);
    prompt
}
