//! Transactional email templates
//!
//! Plain render functions producing the subject, text and HTML bodies for
//! each email kind. Kept deliberately free of any template engine.

use tm_core::services::mail::{
    DeviceAddedEmail, InvoiceEmail, RenderedEmail, TemplateSet, TransferNotificationEmail,
    VerificationEmail, WelcomePurchaseEmail,
};

/// The TrackMail template set
pub struct TrackMailTemplates;

/// Shared HTML shell around a body fragment
fn html_layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body style="font-family: Arial, sans-serif; color: #222; max-width: 560px; margin: 0 auto;">
    <h2 style="color: #1a4d8f;">{title}</h2>
    {body}
    <p style="margin-top: 32px; font-size: 12px; color: #888;">
      — The TrackMail Team
    </p>
  </body>
</html>"#
    )
}

fn button(url: &str, label: &str) -> String {
    format!(
        r#"<p><a href="{url}" style="background: #1a4d8f; color: #fff; padding: 12px 24px; text-decoration: none; border-radius: 4px;">{label}</a></p>
    <p style="font-size: 12px; color: #888;">Or paste this link into your browser: {url}</p>"#
    )
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(amount) => format!(" (${:.2}/month)", amount),
        None => String::new(),
    }
}

impl TemplateSet for TrackMailTemplates {
    fn verification(&self, email: &VerificationEmail) -> RenderedEmail {
        let url = &email.verification_url;

        RenderedEmail {
            subject: "Verify your email address".to_string(),
            text: format!(
                "Welcome to TrackMail!\n\n\
                 Please verify your email address by opening the link below:\n\n\
                 {url}\n\n\
                 This link expires in 24 hours.\n\n\
                 If you didn't create an account, you can safely ignore this email.\n\n\
                 — The TrackMail Team"
            ),
            html: html_layout(
                "Verify your email address",
                &format!(
                    "<p>Welcome to TrackMail! Please confirm your email address.</p>\n    {}\n    <p>This link expires in 24 hours. If you didn't create an account, you can safely ignore this email.</p>",
                    button(url, "Verify email")
                ),
            ),
        }
    }

    fn welcome_purchase(&self, email: &WelcomePurchaseEmail) -> RenderedEmail {
        let plan = match &email.plan_name {
            Some(name) => format!("{}{}", name, format_price(email.plan_price)),
            None => "TrackMail".to_string(),
        };
        let vehicle = email
            .vehicle_name
            .as_deref()
            .map(|v| format!(" for {}", v))
            .unwrap_or_default();

        let verify_text = email
            .verification_url
            .as_deref()
            .map(|url| format!("\n\nPlease verify your email address:\n{url}\n"))
            .unwrap_or_default();
        let verify_html = email
            .verification_url
            .as_deref()
            .map(|url| button(url, "Verify email"))
            .unwrap_or_default();

        RenderedEmail {
            subject: format!("Welcome to TrackMail, {}!", email.first_name),
            text: format!(
                "Hi {},\n\n\
                 Thanks for your purchase! Your {plan} subscription{vehicle} is now active.{verify_text}\n\
                 You can manage your trackers any time from your dashboard.\n\n\
                 — The TrackMail Team",
                email.first_name
            ),
            html: html_layout(
                &format!("Welcome, {}!", email.first_name),
                &format!(
                    "<p>Thanks for your purchase! Your <strong>{plan}</strong> subscription{vehicle} is now active.</p>\n    {verify_html}\n    <p>You can manage your trackers any time from your dashboard.</p>"
                ),
            ),
        }
    }

    fn transfer_notification(&self, email: &TransferNotificationEmail) -> RenderedEmail {
        let sender = email.from_user_name.as_deref().unwrap_or("Another user");
        let registration = email
            .registration_number
            .as_deref()
            .map(|r| format!("\nRegistration: {r}"))
            .unwrap_or_default();

        RenderedEmail {
            subject: "A tracker is being transferred to you".to_string(),
            text: format!(
                "Hi,\n\n\
                 {sender} is transferring a tracker to your account.\n\n\
                 Vehicle: {}\n\
                 IMEI: {}{registration}\n\
                 Transfer reference: {}\n\n\
                 Sign in to your dashboard to accept or decline the transfer.\n\n\
                 — The TrackMail Team",
                email.vehicle_name, email.imei, email.transfer_id
            ),
            html: html_layout(
                "Tracker transfer",
                &format!(
                    "<p>{sender} is transferring a tracker to your account.</p>\n    <ul>\n      <li>Vehicle: <strong>{}</strong></li>\n      <li>IMEI: {}</li>{}\n      <li>Transfer reference: {}</li>\n    </ul>\n    <p>Sign in to your dashboard to accept or decline the transfer.</p>",
                    email.vehicle_name,
                    email.imei,
                    email
                        .registration_number
                        .as_deref()
                        .map(|r| format!("\n      <li>Registration: {r}</li>"))
                        .unwrap_or_default(),
                    email.transfer_id
                ),
            ),
        }
    }

    fn device_added(&self, email: &DeviceAddedEmail) -> RenderedEmail {
        let plan = format!("{}{}", email.plan_name, format_price(email.plan_price));

        RenderedEmail {
            subject: format!("{} is now being tracked", email.vehicle_name),
            text: format!(
                "Hi {},\n\n\
                 Your tracker for {} has been set up on the {plan} plan and is now active.\n\n\
                 You can see its live position on your dashboard.\n\n\
                 — The TrackMail Team",
                email.first_name, email.vehicle_name
            ),
            html: html_layout(
                "Tracker active",
                &format!(
                    "<p>Hi {},</p>\n    <p>Your tracker for <strong>{}</strong> has been set up on the <strong>{plan}</strong> plan and is now active.</p>\n    <p>You can see its live position on your dashboard.</p>",
                    email.first_name, email.vehicle_name
                ),
            ),
        }
    }

    fn invoice(&self, email: &InvoiceEmail) -> RenderedEmail {
        let pdf_text = email
            .invoice_pdf
            .as_deref()
            .map(|pdf| format!("\nDownload the PDF: {pdf}"))
            .unwrap_or_default();
        let pdf_html = email
            .invoice_pdf
            .as_deref()
            .map(|pdf| format!("\n    <p><a href=\"{pdf}\">Download the PDF</a></p>"))
            .unwrap_or_default();

        RenderedEmail {
            subject: format!("Your TrackMail invoice {}", email.invoice_id),
            text: format!(
                "Hi,\n\n\
                 Your invoice {} for ${:.2} is ready.\n\n\
                 View it online: {}{pdf_text}\n\n\
                 — The TrackMail Team",
                email.invoice_id, email.amount, email.invoice_url
            ),
            html: html_layout(
                &format!("Invoice {}", email.invoice_id),
                &format!(
                    "<p>Your invoice for <strong>${:.2}</strong> is ready.</p>\n    {}{pdf_html}",
                    email.amount,
                    button(&email.invoice_url, "View invoice")
                ),
            ),
        }
    }
}
