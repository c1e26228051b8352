//! Hand-written HTML pages
//!
//! Every page is a pure function of the request language and the data shown.
//! User-supplied text goes through [`escape`] before it reaches markup.

use crate::i18n::{Language, Messages};
use hamal_core::Report;

const STYLE: &str = "\
body{font-family:Tahoma,Arial,sans-serif;background:#f4f6f8;margin:0;color:#1f2933}\
header{background:#0b3d5c;color:#fff;padding:12px 24px}\
header a{color:#fff;margin-inline-end:16px;text-decoration:none}\
main{max-width:760px;margin:24px auto;background:#fff;padding:24px;border-radius:8px}\
input,textarea{display:block;width:100%;margin:8px 0;padding:8px;box-sizing:border-box}\
button{background:#0b3d5c;color:#fff;border:0;padding:8px 20px;border-radius:4px}\
table{width:100%;border-collapse:collapse}td,th{border-bottom:1px solid #e4e7eb;padding:8px;text-align:start}\
.pending{color:#b7791f}.approved{color:#2f855a}.rejected{color:#c53030}\
.hint{color:#52606d;font-size:.9em}";

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(language: Language, body: &str) -> String {
    let m = language.messages();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{code}\" dir=\"{dir}\">\n\
         <head><meta charset=\"utf-8\"><title>{site}</title><style>{STYLE}</style></head>\n\
         <body>\n\
         <header><strong>{site}</strong> \
         <a href=\"/\">{home}</a><a href=\"/register\">{register}</a>\
         <a href=\"/add\">{add}</a><a href=\"/admin\">{admin}</a> \
         <a href=\"/set_language/ar\">{ar}</a><a href=\"/set_language/he\">{he}</a></header>\n\
         <main>{body}</main>\n\
         </body>\n\
         </html>\n",
        code = language.code(),
        dir = language.direction(),
        site = m.site_name,
        home = m.home,
        register = m.register,
        add = m.add_report,
        admin = m.admin_panel,
        ar = Language::Arabic.messages().language_name,
        he = Language::Hebrew.messages().language_name,
    )
}

pub fn home(language: Language) -> String {
    let m = language.messages();
    let body = format!(
        "<h2>{site}</h2><p>{tagline}</p>\
         <p><a href=\"/register\">{register}</a> | <a href=\"/add\">{add}</a></p>",
        site = m.site_name,
        tagline = m.tagline,
        register = m.register,
        add = m.add_report,
    );
    layout(language, &body)
}

pub fn register_form(language: Language, bootstrap_pending: bool) -> String {
    let m = language.messages();
    let hint = if bootstrap_pending {
        format!("<p class=\"hint\">{}</p>", m.bootstrap_hint)
    } else {
        String::new()
    };
    let body = format!(
        "<h2>{register}</h2>{hint}\
         <form method=\"post\" action=\"/register\">\
         <input name=\"username\" placeholder=\"{username}\" required>\
         <input name=\"password\" type=\"password\" placeholder=\"{password}\" required>\
         <button>{button}</button></form>",
        register = m.register,
        username = m.username,
        password = m.password,
        button = m.register_button,
    );
    layout(language, &body)
}

pub fn report_form(language: Language) -> String {
    let m = language.messages();
    let body = format!(
        "<h2>{add}</h2>\
         <form method=\"post\" action=\"/add\">\
         <input name=\"title\" placeholder=\"{title}\" required>\
         <textarea name=\"content\" rows=\"6\" placeholder=\"{content}\" required></textarea>\
         <button>{send}</button></form>",
        add = m.add_report,
        title = m.report_title,
        content = m.report_content,
        send = m.send,
    );
    layout(language, &body)
}

pub fn admin_list(language: Language, reports: &[Report]) -> String {
    let m = language.messages();
    let mut body = format!("<h2>{}</h2>", m.admin_panel);

    if reports.is_empty() {
        body.push_str(&format!("<p>{}</p>", m.no_reports));
        return layout(language, &body);
    }

    body.push_str(&format!(
        "<table><tr><th>#</th><th>{}</th><th>{}</th><th>{}</th><th></th></tr>",
        m.report_title, m.report_content, m.status
    ));
    for report in reports {
        body.push_str(&admin_row(m, report));
    }
    body.push_str("</table>");

    layout(language, &body)
}

fn admin_row(m: &Messages, report: &Report) -> String {
    let id = report.id;
    format!(
        "<tr><td>{id}</td><td>{title}</td><td>{content}</td>\
         <td class=\"{class}\">{label}</td>\
         <td><a href=\"/admin/approve/{id}\">{approve}</a> | \
         <a href=\"/admin/reject/{id}\">{reject}</a></td></tr>",
        title = escape(&report.title),
        content = escape(&report.content),
        class = report.status.as_str(),
        label = m.status_label(report.status),
        approve = m.approve,
        reject = m.reject,
    )
}
