use crate::models::cv::Cv;
use crate::view::components::{
    escape, render_account, render_category, render_contact, RenderContext,
};

const ICONIFY_SRC: &str = "https://code.iconify.design/1/1.0.7/iconify.min.js";

/// Renders the whole page as an HTML document.
///
/// Header (name, headline, address, contacts, accounts) first, then each
/// visible category in document order.
pub fn render_page(cv: &Cv, ctx: &RenderContext) -> String {
    let profile = &cv.profile;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en-GB\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&profile.name)));
    html.push_str(&format!("<script src=\"{ICONIFY_SRC}\"></script>\n"));
    html.push_str("</head>\n<body>\n<div id=\"app\">\n");

    html.push_str("<header>");
    html.push_str(&format!(
        "<h1 class=\"name\">{}</h1><p class=\"headline\">{}</p><p class=\"address\">{}</p>",
        escape(&profile.name),
        escape(&profile.headline),
        escape(&profile.address)
    ));
    html.push_str("<div class=\"contacts\">");
    for contact in &profile.contacts {
        html.push_str(&render_contact(contact));
    }
    html.push_str("</div><div class=\"accounts\">");
    for account in &profile.accounts {
        html.push_str(&render_account(account, &profile.username));
    }
    html.push_str("</div></header>\n");

    for category in &cv.categories {
        let section = render_category(category, ctx);
        if !section.is_empty() {
            html.push_str(&section);
            html.push('\n');
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}
