use askama::Template;

/// HTML body of the inquiry email. Every field is HTML-escaped on render.
#[derive(Template)]
#[template(path = "contact.html")]
pub(crate) struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "contact.txt")]
pub(crate) struct ContactPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}
