use log::debug;
use yew::prelude::*;

use crate::config::SiteConfig;

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 3] = [
    Stat {
        number: "5+",
        label: "Years Experience",
    },
    Stat {
        number: "50+",
        label: "Projects Completed",
    },
    Stat {
        number: "30+",
        label: "Happy Clients",
    },
];

const NAV_LINKS: [(&str, &str); 3] = [
    ("#featured-work", "Work"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

const CONTACT_EMAIL: &str = "erickpassosdias@gmail.com";
const CONTACT_LOCATION: &str = "Sao Paulo, SP";
const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("https://www.linkedin.com/in/erickpdias/", "LinkedIn"),
    ("https://github.com/ErickGods", "GitHub"),
];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub site: SiteConfig,
}

fn render_logo(site: &SiteConfig, class: &'static str) -> Html {
    html! {
        <a href="#" class={class}>
            <span class="logo-text">{ site.brand }</span>
            <span class="logo-accent">{ site.brand_accent }</span>
        </a>
    }
}

#[function_component(Header)]
pub fn header(props: &SectionProps) -> Html {
    html! {
        <header class="header">
            <div class="container header-container">
                { render_logo(&props.site, "logo") }
                <nav class="nav">
                    <ul class="nav-list">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href} class="nav-link">{ *label }</a></li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    html! {
        <section class="hero">
            <div class="container hero-container">
                <div class="hero-content">
                    <p class="hero-tagline">{ "Welcome to my portfolio" }</p>
                    <h1 class="hero-title">
                        { "I craft " }<span class="text-gold">{ "digital experiences" }</span>{ " that inspire" }
                    </h1>
                    <p class="hero-description">
                        { "A creative professional dedicated to building beautiful, functional, and business-centered digital products." }
                    </p>
                    <div class="hero-actions">
                        <a href="#featured-work" class="btn btn-primary">{ "View My Work" }</a>
                        <a href="#contact" class="btn btn-outline">{ "Get in Touch" }</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-image-frame">
                        <img src={props.site.asset_url("images/mySelf.jpg")}
                            alt={format!("{}{}", props.site.brand, props.site.brand_accent)}
                            class="hero-image" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about section">
            <div class="container">
                <div class="about-header text-center">
                    <p class="section-tagline">{ "About Me" }</p>
                    <h2 class="section-title">{ "Passionate About Creating Excellence" }</h2>
                    <div class="divider divider-center"></div>
                </div>

                <div class="about-content">
                    <div class="about-text">
                        <p>
                            { "I'm a creative professional with a passion for crafting exceptional digital experiences. \
                               With expertise in design, engineering and development, I bring ideas to life \
                               through clean code and thoughtful design." }
                        </p>
                        <p>
                            { "My approach combines strategic thinking with creative execution, ensuring every \
                               project not only looks beautiful but also delivers measurable results for my clients." }
                        </p>
                    </div>

                    <div class="about-stats">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat-item">
                                <span class="stat-number">{ stat.number }</span>
                                <span class="stat-label">{ stat.label }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // There is no backend to send to; keep the browser from navigating away.
    let on_submit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        debug!("Contact form submitted, no handler configured");
    });

    html! {
        <section id="contact" class="contact section">
            <div class="container">
                <div class="contact-header text-center">
                    <p class="section-tagline">{ "Contact" }</p>
                    <h2 class="section-title">{ "Let's Work Together" }</h2>
                    <div class="divider divider-center"></div>
                    <p class="contact-intro">
                        { "Have a project in mind? I'd love to hear from you. Let's create something extraordinary together." }
                    </p>
                </div>

                <div class="contact-content">
                    <div class="contact-info">
                        <div class="contact-item">
                            <h3 class="contact-item-title">{ "Email" }</h3>
                            <a href={format!("mailto:{}", CONTACT_EMAIL)} class="contact-item-link">{ CONTACT_EMAIL }</a>
                        </div>
                        <div class="contact-item">
                            <h3 class="contact-item-title">{ "Location" }</h3>
                            <p class="contact-item-text">{ CONTACT_LOCATION }</p>
                        </div>
                        <div class="contact-item">
                            <h3 class="contact-item-title">{ "Social" }</h3>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|(href, label)| html! {
                                    <a href={*href} class="social-link">{ *label }</a>
                                }) }
                            </div>
                        </div>
                    </div>

                    <form class="contact-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="name" class="form-label">{ "Name" }</label>
                            <input type="text" id="name" class="form-input" placeholder="Your name" />
                        </div>
                        <div class="form-group">
                            <label for="email" class="form-label">{ "Email" }</label>
                            <input type="email" id="email" class="form-input" placeholder="your@email.com" />
                        </div>
                        <div class="form-group">
                            <label for="message" class="form-label">{ "Message" }</label>
                            <textarea id="message" class="form-textarea" rows="5"
                                placeholder="Tell me about your project..."></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary">{ "Send Message" }</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="container footer-container">
                <div class="footer-brand">
                    { render_logo(&props.site, "footer-logo") }
                    <p class="footer-tagline">{ "Crafting digital excellence." }</p>
                </div>

                <nav class="footer-nav">
                    <a href="#about" class="footer-link">{ "About" }</a>
                    <a href="#featured-work" class="footer-link">{ "Work" }</a>
                    <a href="#contact" class="footer-link">{ "Contact" }</a>
                </nav>

                <div class="footer-bottom">
                    <p class="footer-copyright">{ copyright_line(&props.site, year) }</p>
                </div>
            </div>
        </footer>
    }
}

fn copyright_line(site: &SiteConfig, year: u32) -> String {
    format!(
        "© {} {}{}. All rights reserved.",
        year, site.brand, site.brand_accent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_brand_and_year() {
        let site = SiteConfig::default();
        assert_eq!(
            copyright_line(&site, 2025),
            "© 2025 ForbesFolio. All rights reserved."
        );
    }

    #[test]
    fn about_stats_labels_are_unique() {
        let mut labels: Vec<_> = ABOUT_STATS.iter().map(|stat| stat.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ABOUT_STATS.len());
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        for (href, _) in NAV_LINKS {
            assert!(href.starts_with('#'));
        }
    }
}
