//! HTML fragments for each node of the page: contact line, account link,
//! skill, project, position and category blocks.
//!
//! Hidden nodes render as an empty string.

use chrono::NaiveDate;

use crate::models::cv::{
    Account, Block, Category, Contact, PositionEntry, ProjectEntry, SkillEntry,
};
use crate::view::dates::{duration, format_month_year, period};
use crate::view::visibility::{
    is_composite_visible, is_visible, HideMap, MediaMatcher, DURATION_FLAG,
};

/// Everything a render pass needs besides the data itself.
pub struct RenderContext<'a> {
    pub hide: &'a HideMap,
    pub media: &'a dyn MediaMatcher,
    /// End of ongoing ranges.
    pub today: NaiveDate,
}

impl RenderContext<'_> {
    pub fn shows(&self, flag: &str) -> bool {
        is_visible(flag, self.hide, self.media)
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn icon(name: &str) -> String {
    format!(
        "<span class=\"iconify\" data-icon=\"mdi-{}\"></span>",
        escape(name)
    )
}

fn details(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul>");
    for line in lines {
        html.push_str(&format!("<li>{}</li>", escape(line)));
    }
    html.push_str("</ul>");
    html
}

pub fn render_contact(contact: &Contact) -> String {
    format!(
        "<div class=\"contact\">{}<a href=\"{}\">{}</a></div>",
        icon(contact.icon()),
        escape(&contact.link()),
        escape(&contact.text)
    )
}

pub fn render_account(account: &Account, username: &str) -> String {
    format!(
        "<a class=\"account\" title=\"{}\" href=\"{}\">{}{}</a>",
        escape(&account.name),
        escape(&account.link(username)),
        icon(&account.icon),
        escape(username)
    )
}

pub fn render_skill(skill: &SkillEntry, ctx: &RenderContext) -> String {
    if !ctx.shows(&skill.id) {
        return String::new();
    }
    format!(
        "<div class=\"skill\"><h2>{}</h2>{}</div>",
        escape(&skill.title),
        details(&skill.details)
    )
}

pub fn render_project(project: &ProjectEntry, ctx: &RenderContext) -> String {
    if !ctx.shows(&project.id) {
        return String::new();
    }
    format!(
        "<section class=\"project\"><div class=\"projectTitle\"><h2><a href=\"{}\">{}</a></h2><p>&#8211; {}</p></div>{}</section>",
        escape(&project.url),
        escape(&project.title),
        escape(&project.tech),
        details(&project.details)
    )
}

/// The date heading of a position: a single month label for `date`, or the
/// period plus elapsed time for `start`/`end`.
pub fn position_dates(position: &PositionEntry, ctx: &RenderContext) -> String {
    let mut html = String::new();

    if let Some(date) = position.date {
        html.push_str(&format!(
            "<h3 class=\"date\">{}</h3>",
            escape(&format_month_year(date))
        ));
    }

    if let Some(start) = position.start {
        let end = position.end.unwrap_or(ctx.today);
        let elapsed = duration(start, end);
        html.push_str(&format!(
            "<h3 class=\"date\">{}",
            escape(&period(start, position.end))
        ));
        if ctx.shows(DURATION_FLAG) && !elapsed.is_empty() {
            html.push_str(&format!(
                "<span class=\"duration\"> ({})</span>",
                escape(&elapsed)
            ));
        }
        html.push_str("</h3>");
    }

    html
}

pub fn render_position(position: &PositionEntry, ctx: &RenderContext) -> String {
    if !ctx.shows(&position.id) {
        return String::new();
    }
    format!(
        "<div class=\"position\" id=\"{}\"><div class=\"positionTitle\"><h2 class=\"org\"><a href=\"{}\">{}</a></h2>{}</div><h3 class=\"title\">{}</h3>{}</div>",
        escape(&position.id),
        escape(&position.url),
        escape(&position.organisation),
        position_dates(position, ctx),
        escape(&position.title),
        details(&position.details)
    )
}

pub fn render_block(block: &Block, ctx: &RenderContext) -> String {
    match block {
        Block::Skill(s) => render_skill(s, ctx),
        Block::Project(p) => render_project(p, ctx),
        Block::Position(p) => render_position(p, ctx),
    }
}

pub fn render_category(category: &Category, ctx: &RenderContext) -> String {
    let visible_children = category
        .blocks
        .iter()
        .filter(|b| ctx.shows(b.id()))
        .count();

    if !is_composite_visible(&category.id, ctx.hide, ctx.media, visible_children) {
        return String::new();
    }

    let mut html = format!(
        "<section class=\"category\" id=\"{}\"><div class=\"categoryTitle\"><h1 class=\"icon\">{}</h1><h1>{}</h1></div>",
        escape(&category.id),
        icon(&category.icon),
        escape(&category.title)
    );
    for block in &category.blocks {
        html.push_str(&render_block(block, ctx));
    }
    html.push_str("</section>");
    html
}
