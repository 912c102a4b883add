use yew::prelude::*;

use crate::a11y::MAIN_CONTENT_ID;
use crate::effects::use_page_effects;

struct Service {
    title: &'static str,
    body: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Next-day delivery",
        body: "Parcels picked up today reach any address in Lithuania, Latvia and Estonia tomorrow.",
        icon: "/assets/icons/truck.svg",
    },
    Service {
        title: "Pickup points",
        body: "Drop off and collect at hundreds of lockers and partner shops, open late every day.",
        icon: "/assets/icons/locker.svg",
    },
    Service {
        title: "Business shipping",
        body: "Label printing, tracking and returns built into the tools your shop already uses.",
        icon: "/assets/icons/briefcase.svg",
    },
];

const FIGURES: [(&str, &str); 3] = [
    ("1 200+", "pickup points"),
    ("24 h", "typical delivery time"),
    ("3", "Baltic countries covered"),
];

/// Stepped reveal delay for items in a row of cards.
fn stagger(index: usize) -> String {
    format!("{}ms", index * 100)
}

#[function_component(Home)]
pub fn home() -> Html {
    // Marked elements only exist once this page is mounted.
    use_page_effects();

    html! {
        <main id={MAIN_CONTENT_ID} class="main-content" tabindex="-1">
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-headline">{"Deliveries that keep their promise"}</h1>
                    <p class="hero-subheadline">
                        {"Send and receive parcels across the Baltics with live tracking and flexible pickup."}
                    </p>
                    <div class="hero-cta">
                        <a href="#contact" class="btn btn-primary">{"Send a parcel"}</a>
                        <a href="#services" class="btn btn-secondary">{"Explore services"}</a>
                    </div>
                </div>
            </section>

            <section id="services" class="services" tabindex="-1">
                <h2 class="section-title animate-fade-in">{"What we deliver"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <article class="service-card animate-slide-up" data-delay={stagger(index)}>
                            <img class="service-icon" src={service.icon} alt="" />
                            <h3>{ service.title }</h3>
                            <p>{ service.body }</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="how-it-works" tabindex="-1">
                <h2 class="section-title animate-fade-in">{"How it works"}</h2>
                <div class="step animate-slide-left">
                    <span class="step-number">{"1"}</span>
                    <div>
                        <h3>{"Book online"}</h3>
                        <p>{"Enter the parcel size and destination and pay in under a minute."}</p>
                    </div>
                </div>
                <div class="step animate-slide-right" data-delay="0.1s">
                    <span class="step-number">{"2"}</span>
                    <div>
                        <h3>{"Drop it off"}</h3>
                        <p>{"Leave it at the nearest pickup point or book a courier to your door."}</p>
                    </div>
                </div>
                <div class="step animate-slide-left" data-delay="0.2s">
                    <span class="step-number">{"3"}</span>
                    <div>
                        <h3>{"Track to the door"}</h3>
                        <p>{"Both sender and recipient get live updates until the parcel arrives."}</p>
                    </div>
                </div>
            </section>

            <section id="network" class="network" tabindex="-1">
                <h2 class="section-title animate-fade-in">{"A network built for speed"}</h2>
                <div class="figures">
                    { for FIGURES.iter().enumerate().map(|(index, (value, label))| html! {
                        <div class="figure animate-scale-up" data-delay={stagger(index)}>
                            <span class="figure-value">{ *value }</span>
                            <span class="figure-label">{ *label }</span>
                        </div>
                    }) }
                </div>
                <img
                    class="network-map lazy"
                    src="/assets/placeholder.svg"
                    data-src="/assets/network-map.svg"
                    alt="Map of Venipak pickup points across the Baltic states"
                />
            </section>

            <section id="contact" class="cta-banner" tabindex="-1">
                <div class="cta-content animate-bounce-in" data-duration="0.8s">
                    <h2>{"Ready to ship?"}</h2>
                    <p>{"Create a shipment now or talk to our team about business rates."}</p>
                    <div class="cta-actions">
                        <a href="mailto:info@venipak.com" class="btn btn-primary">{"Contact sales"}</a>
                        <a href="#main-content" class="btn btn-secondary">{"Back to top"}</a>
                    </div>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_stagger() {
        assert_eq!(stagger(0), "0ms");
        assert_eq!(stagger(2), "200ms");
    }
}
