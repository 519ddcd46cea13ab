use crate::error::RenderError;

const POST_LINK_PREFIX: &str = "post:";

/// Renders markdown to HTML with comrak's default (raw-HTML-omitting) options.
///
/// The output is meant to be inserted into a page as-is.
pub async fn render(markdown: String) -> Result<String, RenderError> {
    let html = tokio::task::spawn_blocking(move || {
        let options = comrak::Options::default();
        let arena = comrak::Arena::new();
        let root = comrak::parse_document(&arena, &markdown, &options);

        process_nodes(root);

        let mut html = Vec::new();
        comrak::format_html(root, &options, &mut html)?;
        std::io::Result::Ok(html)
    })
    .await??;

    Ok(String::from_utf8_lossy(&html).into_owned())
}

fn process_nodes<'a>(node: &'a comrak::nodes::AstNode<'a>) {
    process_node(node);
    for child in node.children() {
        process_nodes(child);
    }
}

fn process_node<'a>(node: &'a comrak::nodes::AstNode<'a>) {
    match &mut node.data.borrow_mut().value {
        comrak::nodes::NodeValue::Image(link) | comrak::nodes::NodeValue::Link(link) => {
            process_link(link);
        }
        _ => (),
    }
}

// `post:some-slug` points at another post
fn process_link(link: &mut comrak::nodes::NodeLink) {
    if let Some(slug) = link.url.strip_prefix(POST_LINK_PREFIX) {
        link.url = crate::blog::post_url(slug);
    }
}
