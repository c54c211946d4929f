use crate::gallery::translate::english_title_from_prompt;

/// Escapes text for insertion into HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Three-section article (Concept, Visual Direction, Narrative) for one entry.
///
/// `entry_title` and the prompt cue are plain text; escaping happens here and
/// nowhere upstream.
pub fn build_article(category: &str, entry_title: &str, prompt: &str) -> String {
    let safe_category = escape_html(category);
    let safe_title = escape_html(entry_title);
    let safe_prompt = escape_html(&english_title_from_prompt(prompt, ""));

    let mut html = String::new();
    html.push_str("<h3>Concept</h3>");
    html.push_str(&format!(
        "<p><strong>{safe_category}</strong> is curated as grouped variations from a single title prompt. \
         Each set explores mood, camera, and lighting while keeping the core idea consistent.</p>"
    ));
    html.push_str("<h3>Visual Direction</h3>");
    html.push_str(&format!(
        "<p>This entry focuses on <strong>{safe_title}</strong>. The prompt cue is: <em>{safe_prompt}</em>. \
         Variations prioritize readable silhouettes, controlled highlights, and cinematic depth.</p>"
    ));
    html.push_str("<h3>Narrative</h3>");
    html.push_str(
        "<p>Viewed together, the sequence reads like a short montage: setup, impact, and aftermath without locking \
         into one literal storyline.</p>",
    );
    html
}
