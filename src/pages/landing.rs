use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::{Nav, NavSection};
use crate::effects::anchor::AnchorLink;
use crate::effects::reveal::{RevealAnimator, RevealOptions};

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("AI Strategy", "Find where AI pays off in your business before you spend on it."),
    ("Rapid Prototyping", "Working proofs of concept in weeks, built on your own data."),
    ("Team Enablement", "Hands-on training so your people can run what we build."),
];

const SERVICES: &[(&str, &str, &str)] = &[
    ("🧠", "AI Readiness Audit", "A review of your data, processes and tooling with a prioritized roadmap."),
    ("⚙️", "Workflow Automation", "LLM-powered assistants and pipelines that take repetitive work off your team."),
    ("📊", "Predictive Analytics", "Forecasting and insight models that plug into the dashboards you already use."),
    ("🛡️", "Responsible AI", "Governance, evaluation and risk controls for models in production."),
];

const STEPS: &[(&str, &str)] = &[
    ("Discover", "We map your goals, constraints and the data you have."),
    ("Design", "We pick the highest-value use case and scope a pilot."),
    ("Build", "We deliver a working pilot and measure it against agreed targets."),
    ("Scale", "We harden, hand over and help you roll it out."),
];

const PLANS: &[(&str, &str, &[&str], bool)] = &[
    ("Starter", "$2,500", &["Readiness audit", "Use-case workshop", "Written roadmap"], false),
    ("Growth", "$9,000", &["Everything in Starter", "Pilot build", "4 weeks of support"], true),
    ("Enterprise", "Custom", &["Dedicated team", "Multiple pilots", "Governance program"], false),
];

const REASONS: &[(&str, &str)] = &[
    ("Outcome first", "Every engagement starts from a business metric, not a model."),
    ("Vendor neutral", "We recommend what fits, not what we resell."),
    ("Built to hand over", "Documentation and training are part of every delivery."),
];

fn page_sections() -> Vec<NavSection> {
    vec![
        NavSection::new("home", None),
        NavSection::new("services", Some("Services")),
        NavSection::new("process", Some("Process")),
        NavSection::new("pricing", Some("Pricing")),
        NavSection::new("why-us", Some("Why Us")),
        NavSection::new("contact", Some("Contact")),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let sections = use_state(page_sections);
    let root = use_node_ref();

    // Fade cards in as they scroll into view.
    {
        let root = root.clone();
        use_effect_with_deps(
            move |_| {
                let animator = root.cast::<Element>().and_then(|root| {
                    RevealAnimator::attach(&root, RevealOptions::default())
                        .map_err(|e| warn!("Failed to attach reveal animations: {:?}", e))
                        .ok()
                });
                move || drop(animator)
            },
            (),
        );
    }

    let node = |id: &str| {
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.node.clone())
            .unwrap_or_default()
    };

    html! {
        <>
            <style>{STYLES}</style>
            <Nav sections={(*sections).clone()} />
            <main ref={root}>
                <section id="home" class="hero" ref={node("home")}>
                    <div class="container">
                        <h1>{"Turn AI ambition into measurable results"}</h1>
                        <p class="hero-subtitle">
                            {"AIFluence helps growing companies choose, build and adopt AI that moves the numbers that matter."}
                        </p>
                        <div class="hero-actions">
                            <AnchorLink href="#contact" class="btn btn-primary">{"Book a Consultation"}</AnchorLink>
                            <AnchorLink href="#services" class="btn btn-secondary">{"Explore Services"}</AnchorLink>
                        </div>
                        <div class="hero-cards">
                            { for HIGHLIGHTS.iter().map(|(title, text)| html! {
                                <div class="card" key={*title}>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="services" ref={node("services")}>
                    <div class="container">
                        <h2 class="section-title">{"Services"}</h2>
                        <div class="grid">
                            { for SERVICES.iter().map(|(icon, title, text)| html! {
                                <div class="service-card" key={*title}>
                                    <div class="service-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="process" ref={node("process")}>
                    <div class="container">
                        <h2 class="section-title">{"How We Work"}</h2>
                        <div class="steps">
                            { for STEPS.iter().enumerate().map(|(index, (title, text))| html! {
                                <div class="step" key={*title}>
                                    <span class="step-number">{(index + 1).to_string()}</span>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="pricing" ref={node("pricing")}>
                    <div class="container">
                        <h2 class="section-title">{"Pricing"}</h2>
                        <div class="grid">
                            { for PLANS.iter().map(|(name, price, features, featured)| html! {
                                <div class={classes!("pricing-card", featured.then(|| "featured"))} key={*name}>
                                    <h3>{*name}</h3>
                                    <div class="price">{*price}</div>
                                    <ul>
                                        { for features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                    <AnchorLink href="#contact" class="btn btn-primary">{"Get Started"}</AnchorLink>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="why-us" ref={node("why-us")}>
                    <div class="container">
                        <h2 class="section-title">{"Why AIFluence"}</h2>
                        <div class="grid">
                            { for REASONS.iter().map(|(title, text)| html! {
                                <div class="why-card" key={*title}>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" ref={node("contact")}>
                    <div class="container narrow">
                        <h2 class="section-title">{"Request a Consultation"}</h2>
                        <ContactForm />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{"© AIFluence. Innovation & Entrepreneurship project."}</p>
            </footer>
        </>
    }
}

const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #0a0e27;
    color: #e2e8f0;
    line-height: 1.6;
}
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 720px; }
.navbar {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 1000;
    backdrop-filter: blur(10px);
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.logo {
    font-size: 1.5rem;
    font-weight: bold;
    text-decoration: none;
    background: linear-gradient(135deg, #00f0ff 0%, #0ea5e9 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.nav-links { display: flex; gap: 2rem; list-style: none; }
.nav-links a { color: #a5b4fc; text-decoration: none; transition: color 0.3s ease; }
.nav-links a:hover { color: #00f0ff; }
section { padding: 6rem 0; }
.hero { padding-top: 10rem; text-align: center; }
.hero h1 { font-size: 3rem; margin-bottom: 1rem; color: #fff; }
.hero-subtitle { color: #a5b4fc; font-size: 1.2rem; max-width: 640px; margin: 0 auto 2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-bottom: 3rem; }
.hero-cards, .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; }
.section-title { text-align: center; font-size: 2.25rem; margin-bottom: 3rem; color: #fff; }
.card, .service-card, .pricing-card, .step, .why-card {
    background: rgba(20, 27, 61, 0.8);
    border: 1px solid rgba(0, 240, 255, 0.15);
    border-radius: 16px;
    padding: 2rem;
}
.card h3, .service-card h3, .pricing-card h3, .step h3, .why-card h3 { color: #fff; margin-bottom: 0.5rem; }
.service-icon { font-size: 2rem; margin-bottom: 1rem; }
.step-number {
    display: inline-flex;
    width: 2.5rem;
    height: 2.5rem;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: linear-gradient(135deg, #00f0ff 0%, #0ea5e9 100%);
    color: #0a0e27;
    font-weight: bold;
    margin-bottom: 1rem;
}
.pricing-card.featured { border-color: #00f0ff; box-shadow: 0 0 30px rgba(0, 240, 255, 0.2); }
.price { font-size: 2rem; color: #00f0ff; margin: 1rem 0; }
.pricing-card ul { list-style: none; margin-bottom: 1.5rem; }
.btn {
    display: inline-block;
    padding: 0.8rem 1.8rem;
    border-radius: 8px;
    border: none;
    font-weight: bold;
    text-decoration: none;
    cursor: pointer;
}
.btn-primary { background: linear-gradient(135deg, #00f0ff 0%, #0ea5e9 100%); color: #0a0e27; }
.btn-secondary { background: transparent; color: #00f0ff; border: 1px solid #00f0ff; }
.contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.form-group { display: flex; flex-direction: column; gap: 0.4rem; }
.form-group input, .form-group textarea {
    padding: 0.8rem;
    border-radius: 8px;
    border: 1px solid rgba(0, 240, 255, 0.2);
    background: rgba(10, 14, 39, 0.6);
    color: #fff;
    font: inherit;
}
.form-message { min-height: 1.5rem; text-align: center; }
.form-message.success { color: #34d399; }
.form-message.error { color: #f87171; }
.footer { text-align: center; padding: 2rem; color: #64748b; border-top: 1px solid rgba(0, 240, 255, 0.1); }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero h1 { font-size: 2.2rem; }
    .form-row { grid-template-columns: 1fr; }
}
"#;
