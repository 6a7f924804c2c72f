//! Contact page body.

use std::fmt::Write;

use chancery_content::SiteSettings;
use chancery_richtext::escape_html;

pub(crate) fn render(settings: Option<&SiteSettings>) -> String {
    let contact = settings.and_then(|s| s.contact_info.as_ref());
    let mut out = String::with_capacity(2048);

    out.push_str("<section class=\"contact-page\"><h1>Contact Us</h1>");

    // Contact details
    out.push_str("<section class=\"contact-details\"><h2>Contact Information</h2>");
    match contact {
        Some(contact) => {
            if let Some(phone) = contact.phone.as_deref() {
                let _ = write!(
                    out,
                    r#"<p class="phone">Phone: <a href="tel:{}">{}</a></p>"#,
                    escape_html(&phone.replace(' ', "")),
                    escape_html(phone)
                );
            }
            if let Some(email) = contact.email.as_deref() {
                let _ = write!(
                    out,
                    r#"<p class="email">Email: <a href="mailto:{}">{}</a></p>"#,
                    escape_html(email),
                    escape_html(email)
                );
            }
            if let Some(address) = contact.address.as_deref() {
                let _ = write!(out, "<p class=\"address\">{}</p>", escape_html(address));
            }
            if !contact.hours.is_empty() {
                out.push_str("<h3>Opening Hours</h3><dl class=\"opening-hours\">");
                for line in &contact.hours {
                    let _ = write!(
                        out,
                        "<dt>{}</dt><dd>{}</dd>",
                        escape_html(&line.days),
                        escape_html(&line.hours)
                    );
                }
                out.push_str("</dl>");
            }
        }
        None => super::content_missing("Contact Information", &mut out),
    }
    out.push_str("</section>");

    // Enquiry form. Submission handling lives outside this site; the form
    // posts to the route it renders on so a future handler can pick it up.
    out.push_str(
        r#"<form class="contact-form" method="post" action="/contact">
<label for="name">Name</label><input id="name" name="name" type="text" required>
<label for="email">Email</label><input id="email" name="email" type="email" required>
<label for="phone">Phone</label><input id="phone" name="phone" type="tel">
<label for="subject">Subject</label><input id="subject" name="subject" type="text">
<label for="message">Message</label><textarea id="message" name="message" rows="6" required></textarea>
<button type="submit">Send Message</button>
</form>"#,
    );

    out.push_str("</section>");
    out
}
