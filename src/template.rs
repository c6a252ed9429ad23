// HTML fragments built from the portfolio content.
// Pure string builders; all content text goes through `escape_html`.

use folio_core::content::{Education, Project, SkillProgress};
use std::collections::BTreeMap;

pub fn escape_html(text: &str) -> String {
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

pub fn project_card(project: &Project) -> String {
    let stack: String = project
        .stack
        .iter()
        .map(|tech| format!("<span class=\"stack-tag\">{}</span>", escape_html(tech)))
        .collect();
    let footer = match project.live_link() {
        Some(link) => format!(
            "<a class=\"project-link magnet\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View project</a>",
            escape_html(link)
        ),
        None => "<span class=\"coming-soon\">Coming soon</span>".to_string(),
    };
    format!(
        "<article class=\"project-card\">\
         <div class=\"project-image\"><img src=\"{image}\" alt=\"{name}\" loading=\"lazy\"></div>\
         <div class=\"project-info\">\
         <span class=\"project-number\">{number}</span>\
         <h3 class=\"project-name\">{name}</h3>\
         <p class=\"project-role\">{role}</p>\
         <p class=\"project-description\">{description}</p>\
         <div class=\"project-stack\">{stack}</div>\
         {footer}\
         </div></article>",
        image = escape_html(&project.image),
        name = escape_html(&project.name),
        number = escape_html(&project.number),
        role = escape_html(&project.role),
        description = escape_html(&project.description),
    )
}

pub fn project_cards(projects: &[Project]) -> String {
    projects.iter().map(project_card).collect()
}

/// One dot per card; the first starts active.
pub fn carousel_dots(count: usize) -> String {
    (0..count)
        .map(|i| {
            let class = if i == 0 {
                "carousel-dot active"
            } else {
                "carousel-dot"
            };
            format!(
                "<button class=\"{class}\" data-index=\"{i}\" aria-label=\"Project {}\"></button>",
                i + 1
            )
        })
        .collect()
}

pub fn skill_rows(skills: &[SkillProgress]) -> String {
    skills
        .iter()
        .map(|skill| {
            let pct = skill.percentage.min(100);
            format!(
                "<div class=\"skill-item\">\
                 <div class=\"skill-row\"><span class=\"skill-name\">{}</span><span class=\"skill-pct\">{pct}%</span></div>\
                 <div class=\"level\"><div class=\"level-bar\" data-width=\"{pct}%\"></div></div>\
                 </div>",
                escape_html(&skill.name)
            )
        })
        .collect()
}

pub fn education_cards(education: &[Education]) -> String {
    education
        .iter()
        .map(|ed| {
            let highlights: String = ed
                .highlights
                .iter()
                .map(|h| {
                    format!(
                        "<li class=\"highlight-item\"><i class=\"fas fa-{}\"></i><h4>{}</h4><p>{}</p></li>",
                        escape_html(&h.icon),
                        escape_html(&h.title),
                        escape_html(&h.description)
                    )
                })
                .collect();
            let logo = ed
                .logo
                .as_deref()
                .map(|src| {
                    format!(
                        "<img class=\"education-logo\" src=\"{}\" alt=\"{}\">",
                        escape_html(src),
                        escape_html(&ed.school)
                    )
                })
                .unwrap_or_default();
            format!(
                "<div class=\"education-card\">{logo}\
                 <h3 class=\"education-school\">{}</h3>\
                 <p class=\"education-degree\">{}</p>\
                 <span class=\"education-duration\">{}</span>\
                 <p class=\"education-description\">{}</p>\
                 <ul class=\"education-highlights\">{highlights}</ul></div>",
                escape_html(&ed.school),
                escape_html(&ed.degree),
                escape_html(&ed.duration),
                escape_html(&ed.description),
            )
        })
        .collect()
}

pub fn social_links(social: &BTreeMap<String, String>) -> String {
    social
        .iter()
        .map(|(network, url)| {
            format!(
                "<a class=\"social-link magnet\" href=\"{}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{net}\"><i class=\"fab fa-{net}\"></i></a>",
                escape_html(url),
                net = escape_html(network)
            )
        })
        .collect()
}
