use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-company">
                    <img src="/HVoutsourcingfavicon.webp" alt="HV Outsourcing Logo" class="footer-logo" />
                    <p>
                        {"Premier, enterprise-grade BPO empowering U.S.-based businesses with unparalleled customer service and sales solutions."}
                    </p>
                    <div class="footer-social">
                        <a href="#" aria-label="LinkedIn">{"in"}</a>
                        <a href="#" aria-label="Facebook">{"f"}</a>
                        <a href="#" aria-label="Instagram">{"ig"}</a>
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <nav class="footer-links">
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                        <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                        <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    </nav>
                </div>

                <div>
                    <h3>{"Contact"}</h3>
                    <p>{"Makati City, Philippines"}</p>
                    <p>{"We'll provide direct contact details upon inquiry"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 Horvath & Vaeth Outsourcing OPC. All rights reserved."}</p>
            </div>
        </footer>
    }
}
