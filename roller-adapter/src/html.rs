/// A link embedded in an item's expanded description. Always opens in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub label: String,
    pub url: String,
}

impl ActionLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape::encode_double_quoted_attribute(&self.url),
            html_escape::encode_text(&self.label)
        )
    }
}

/// Wraps `description` (inserted as-is) in a block, followed by a links block when `links` is
/// non-empty.
pub fn description_html(description: &str, links: &[ActionLink]) -> String {
    let mut out = format!(r#"<div class="roller-description">{description}</div>"#);
    if links.is_empty() {
        return out;
    }
    out.push_str(r#"<div class="roller-links">"#);
    for link in links {
        out.push_str(&link.to_html());
    }
    out.push_str("</div>");
    out
}
