//! Server-rendered HTML for the public and admin catalog pages.

use crate::catalog::models::Book;

const STYLE: &str = "\
body{font-family:Georgia,serif;max-width:640px;margin:2rem auto;padding:0 1rem;color:#222}\
h1{border-bottom:1px solid #ccc;padding-bottom:.3rem}\
ul.books{list-style:none;padding:0}\
ul.books li{padding:.4rem 0;border-bottom:1px dotted #ddd;display:flex;align-items:center;justify-content:space-between}\
form.upload{margin:1rem 0;padding:1rem;border:1px solid #ccc}\
form.upload input{display:block;margin:.4rem 0}\
button{cursor:pointer}";

/// Escape text interpolated into HTML.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

/// The public listing: every book title links to its stored file.
pub fn render_index(books: &[Book]) -> String {
    let mut body = String::from("<h1>Library</h1>\n");
    if books.is_empty() {
        body.push_str("<p>No books have been uploaded yet.</p>\n");
    } else {
        body.push_str("<ul class=\"books\">\n");
        for book in books {
            body.push_str(&format!(
                "<li><a href=\"/uploads/{}\">{}</a></li>\n",
                escape(&book.filename),
                escape(&book.title)
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/admin\">Admin</a></p>\n");
    page("Library", &body)
}

/// The admin listing: upload form plus a delete control per book.
pub fn render_admin(books: &[Book]) -> String {
    let mut body = String::from("<h1>Admin</h1>\n");
    body.push_str(
        "<form class=\"upload\" action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title (optional)\">\n\
         <input type=\"password\" name=\"password\" placeholder=\"Admin password\" required>\n\
         <input type=\"file\" name=\"bookFile\" accept=\"application/pdf\" required>\n\
         <button type=\"submit\">Upload</button>\n\
         </form>\n",
    );
    if books.is_empty() {
        body.push_str("<p>No books have been uploaded yet.</p>\n");
    } else {
        body.push_str("<ul class=\"books\">\n");
        for book in books {
            body.push_str(&format!(
                "<li><a href=\"/uploads/{}\">{}</a>\n\
                 <form action=\"/delete/{}\" method=\"post\">\n\
                 <input type=\"password\" name=\"password\" placeholder=\"Admin password\" required>\n\
                 <button type=\"submit\">Delete</button>\n\
                 </form></li>\n",
                escape(&book.filename),
                escape(&book.title),
                escape(&book.id)
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Public listing</a></p>\n");
    page("Admin", &body)
}
