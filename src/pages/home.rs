use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    icon: Icon,
    features: &'static [&'static str],
}

const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title: "Desenvolvimento Web",
        description: "Sites modernos, responsivos e otimizados para SEO.",
        icon: Icon::Monitor,
        features: &["Landing Pages", "Sistemas Web", "Blogs"],
    },
    ServiceCard {
        title: "Aplicativos Mobile",
        description: "Apps nativos e multiplataforma de alta performance.",
        icon: Icon::Smartphone,
        features: &["iOS", "Android", "React Native", "Node.js"],
    },
    ServiceCard {
        title: "Sistemas Empresariais",
        description: "Soluções personalizadas para sua empresa.",
        icon: Icon::Settings,
        features: &["ERP", "CRM", "Dashboards", "Integrações"],
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const PORTFOLIO: [Project; 4] = [
    Project {
        title: "Projeto 1",
        description: "Descrição do Projeto 1",
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "App de Cardápio Online",
        description: "Aplicativo móvel para cardápio online",
        image: "https://images.unsplash.com/photo-1568031813264-d394c5d474b9?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Projeto 3",
        description: "Descrição do Projeto 3",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Projeto 4",
        description: "Descrição do Projeto 4",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?auto=format&fit=crop&w=800&q=80",
    },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_open_quote: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_quote = {
        let on_open_quote = props.on_open_quote.clone();
        Callback::from(move |_: MouseEvent| on_open_quote.emit(()))
    };

    html! {
        <div class="landing">
            <style>
            {r#"
            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                background: linear-gradient(135deg, rgba(37, 99, 235, 0.1), transparent);
            }
            .hero-blob {
                position: absolute;
                width: 18rem;
                height: 18rem;
                border-radius: 50%;
                filter: blur(64px);
                animation: blob 7s infinite;
            }
            .hero-blob.one { top: 5rem; left: 2.5rem; background: rgba(37, 99, 235, 0.2); }
            .hero-blob.two { top: 10rem; right: 2.5rem; background: rgba(147, 51, 234, 0.2); animation-delay: 2s; }
            .hero-blob.three { bottom: 5rem; left: 50%; background: rgba(219, 39, 119, 0.2); animation-delay: 4s; }
            @keyframes blob {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -50px) scale(1.1); }
                66% { transform: translate(-20px, 20px) scale(0.9); }
            }
            .hero-content {
                position: relative;
                text-align: center;
                max-width: 56rem;
                padding: 8rem 1rem 5rem;
            }
            .hero-content h1 {
                font-size: 4.5rem;
                margin-bottom: 2rem;
                background: linear-gradient(90deg, #2563eb, #a855f7, #ec4899);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .hero-content p {
                font-size: 1.5rem;
                color: #4b5563;
                margin-bottom: 3rem;
                line-height: 1.6;
            }
            .dark .hero-content p { color: #d1d5db; }
            .hero-content p span { color: #2563eb; }
            .hero-actions {
                display: flex;
                gap: 1rem;
                justify-content: center;
                flex-wrap: wrap;
            }
            .cta {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                background: #2563eb;
                color: #fff;
                border: none;
                padding: 1rem 2rem;
                border-radius: 0.75rem;
                font-size: 1.125rem;
                cursor: pointer;
                text-decoration: none;
            }
            .cta.ghost {
                background: #fff;
                color: inherit;
                border: 1px solid #e5e7eb;
            }
            .dark .cta.ghost { background: #1f2937; border-color: #374151; }
            .section {
                padding: 5rem 1rem;
            }
            .section.tinted { background: #f9fafb; }
            .dark .section.tinted { background: rgba(31, 41, 55, 0.5); }
            .section-header {
                text-align: center;
                max-width: 48rem;
                margin: 0 auto 4rem;
            }
            .section-header h2 { font-size: 2.25rem; margin-bottom: 1.5rem; }
            .section-header p { font-size: 1.25rem; color: #4b5563; }
            .dark .section-header p { color: #d1d5db; }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .service-card {
                background: #fff;
                padding: 2rem;
                border-radius: 1rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                transition: box-shadow 0.3s ease;
            }
            .dark .service-card { background: #1f2937; }
            .service-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
            .service-card .icon-box {
                width: 4rem;
                height: 4rem;
                border-radius: 0.75rem;
                background: rgba(37, 99, 235, 0.1);
                color: #2563eb;
                display: flex;
                align-items: center;
                justify-content: center;
                margin-bottom: 1.5rem;
                transition: all 0.3s ease;
            }
            .service-card:hover .icon-box { background: #2563eb; color: #fff; }
            .service-card ul { list-style: none; padding: 0; }
            .service-card li::before {
                content: '';
                display: inline-block;
                width: 0.375rem;
                height: 0.375rem;
                border-radius: 50%;
                background: #2563eb;
                margin-right: 0.5rem;
                vertical-align: middle;
            }
            .portfolio-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
                gap: 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .portfolio-item {
                position: relative;
                overflow: hidden;
                border-radius: 1rem;
                aspect-ratio: 16 / 9;
            }
            .portfolio-item img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.5s ease;
            }
            .portfolio-item:hover img { transform: scale(1.1); }
            .portfolio-overlay {
                position: absolute;
                inset: 0;
                display: flex;
                flex-direction: column;
                justify-content: flex-end;
                padding: 2rem;
                color: #fff;
                background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                opacity: 0;
                transition: opacity 0.3s ease;
            }
            .portfolio-item:hover .portfolio-overlay { opacity: 1; }
            .contact-card {
                max-width: 56rem;
                margin: 0 auto;
                background: #fff;
                border-radius: 1rem;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                padding: 3rem;
            }
            .dark .contact-card { background: #1f2937; }
            .contact-card label { display: block; font-size: 0.875rem; margin-bottom: 0.5rem; }
            .contact-card input,
            .contact-card textarea {
                width: 100%;
                box-sizing: border-box;
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid #e5e7eb;
                background: transparent;
                color: inherit;
                margin-bottom: 1.5rem;
            }
            .contact-row {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
            }
            .contact-card .cta { width: 100%; justify-content: center; }
            @media (max-width: 768px) {
                .hero-content h1 { font-size: 3rem; }
                .hero-content p { font-size: 1.25rem; }
                .portfolio-grid { grid-template-columns: 1fr; }
                .contact-card { padding: 2rem; }
            }
            "#}
            </style>

            <section class="hero">
                <div class="hero-blob one"></div>
                <div class="hero-blob two"></div>
                <div class="hero-blob three"></div>
                <div class="hero-content">
                    <h1>{"Sua ideia, conectada ao amanhã."}</h1>
                    <p>
                        {"Desenvolvimento Web, Aplicativos Móveis e Sistemas Personalizados para"}
                        <span>{" Empresas Inovadoras"}</span>
                    </p>
                    <div class="hero-actions">
                        <button class="cta" onclick={open_quote}>
                            {"Comece Agora"}
                            <Glyph icon={Icon::ChevronRight} size={20} />
                        </button>
                        <a class="cta ghost" href="#portfolio">{"Ver Projetos"}</a>
                    </div>
                </div>
            </section>

            <section id="services" class="section tinted">
                <div class="section-header">
                    <h2>{"Nossos Serviços"}</h2>
                    <p>{"Soluções completas e personalizadas para todas as suas necessidades digitais"}</p>
                </div>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="icon-box">
                                <Glyph icon={service.icon} size={32} />
                            </div>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section id="portfolio" class="section">
                <div class="section-header">
                    <h2>{"Nossos Projetos"}</h2>
                    <p>{"Conheça alguns dos projetos que desenvolvemos para nossos clientes"}</p>
                </div>
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().map(|project| html! {
                        <div class="portfolio-item">
                            <img src={project.image} alt={project.title} />
                            <div class="portfolio-overlay">
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="section tinted">
                <div class="contact-card">
                    <div class="section-header" style="margin-bottom: 3rem;">
                        <h2>{"Vamos Conversar?"}</h2>
                        <p>{"Entre em contato e descubra como podemos ajudar no seu próximo projeto"}</p>
                    </div>
                    // Presentational only; quote requests go through the wizard.
                    <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="contact-row">
                            <div>
                                <label>{"Nome"}</label>
                                <input type="text" placeholder="Seu nome completo" />
                            </div>
                            <div>
                                <label>{"Email"}</label>
                                <input type="email" placeholder="seu@email.com" />
                            </div>
                        </div>
                        <label>{"Assunto"}</label>
                        <input type="text" placeholder="Como podemos ajudar?" />
                        <label>{"Mensagem"}</label>
                        <textarea rows="4" placeholder="Descreva seu projeto ou dúvida..." />
                        <button type="submit" class="cta">{"Enviar Mensagem"}</button>
                    </form>
                </div>
            </section>
        </div>
    }
}
