use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"Venipak"}</span>
                    <p>{"Parcel delivery across the Baltics and beyond."}</p>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    <a href="#services">{"Services"}</a>
                    <a href="#how-it-works">{"How it works"}</a>
                    <a href="#network">{"Network"}</a>
                    <a href="#contact">{"Contact"}</a>
                </nav>
            </div>
            <p class="footer-legal">{"© Venipak. All rights reserved."}</p>
        </footer>
    }
}
