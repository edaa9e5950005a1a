use leptos::prelude::*;

use super::form::ContactForm;
use super::types::field;

/// Contact form posting back to `/contact`, with the current status line.
#[component]
pub fn ContactFormView(form: ContactForm) -> impl IntoView {
    let sending = form.is_sending();
    let status = form.status().message();
    let fields = form.fields().clone();

    view! {
        <section class="sections contact_section">
            <div class="container">
                <form class="contact_form" method="post" action="/contact" enctype="multipart/form-data">
                    <input type="text" name={field::NAME} placeholder="Your Name" value={fields.name} required/>
                    <input type="email" name={field::EMAIL} placeholder="Your Email" value={fields.email} required/>
                    <textarea name={field::MESSAGE} placeholder="Message" required>{fields.message}</textarea>
                    <input type="file" name={field::FILE} accept=".pdf,.jpg,.png" required/>
                    <button type="submit" class="my_btn" disabled=sending>"Send"</button>
                    <p class="form_status">{status}</p>
                </form>
            </div>
        </section>
    }
}
