use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};

const STATS: [(&str, &str); 4] = [
    ("Projetos Entregues", "150+"),
    ("Clientes Satisfeitos", "100+"),
    ("Anos no Mercado", "8+"),
    ("Profissionais", "25+"),
];

struct Highlight {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const VALUES: [Highlight; 3] = [
    Highlight {
        icon: Icon::Code,
        title: "Excelência Técnica",
        description: "Comprometimento com as melhores práticas e tecnologias mais recentes do mercado.",
    },
    Highlight {
        icon: Icon::Users,
        title: "Foco no Cliente",
        description: "Parceria próxima e comunicação transparente em todas as etapas do projeto.",
    },
    Highlight {
        icon: Icon::Target,
        title: "Resultados Mensuráveis",
        description: "Soluções que geram valor real e impacto positivo nos negócios dos nossos clientes.",
    },
];

const ACHIEVEMENTS: [Highlight; 3] = [
    Highlight {
        icon: Icon::Rocket,
        title: "Inovação Constante",
        description: "Pioneiros em adotar e implementar novas tecnologias e metodologias.",
    },
    Highlight {
        icon: Icon::Award,
        title: "Reconhecimento",
        description: "Premiados como uma das empresas mais inovadoras do setor em 2023.",
    },
    Highlight {
        icon: Icon::TrendingUp,
        title: "Crescimento Sustentável",
        description: "Expansão consistente mantendo a qualidade e excelência em cada projeto.",
    },
];

fn highlight_grid(items: &[Highlight], card_class: &'static str) -> Html {
    html! {
        <div class="card-grid">
            { for items.iter().map(|item| html! {
                <div class={card_class}>
                    <div class="about-icon">
                        <Glyph icon={item.icon} size={28} />
                    </div>
                    <h3>{ item.title }</h3>
                    <p>{ item.description }</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="about-page">
            <style>
            {r#"
            .about-page { padding-top: 5rem; }
            .about-hero {
                background: linear-gradient(to bottom, #2563eb, #1e40af);
                color: #fff;
                text-align: center;
                padding: 5rem 1rem;
            }
            .about-hero h1 { font-size: 3.75rem; margin-bottom: 1.5rem; }
            .about-hero p { font-size: 1.25rem; opacity: 0.9; max-width: 48rem; margin: 0 auto; }
            .about-section { padding: 5rem 1rem; max-width: 72rem; margin: 0 auto; }
            .about-section h2 { font-size: 1.875rem; text-align: center; margin-bottom: 3rem; }
            .about-section.tinted { max-width: none; background: #f9fafb; }
            .dark .about-section.tinted { background: #1f2937; }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .stats-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                gap: 2rem;
                text-align: center;
            }
            .stat-value { font-size: 2.25rem; font-weight: 700; color: #2563eb; margin-bottom: 0.5rem; }
            .mission-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 3rem;
            }
            .mission-grid h2 { text-align: left; margin-bottom: 1.5rem; }
            .mission-grid p { font-size: 1.125rem; line-height: 1.7; color: #4b5563; }
            .dark .mission-grid p { color: #d1d5db; }
            .about-icon {
                width: 4rem;
                height: 4rem;
                border-radius: 50%;
                background: #dbeafe;
                color: #2563eb;
                display: flex;
                align-items: center;
                justify-content: center;
                margin-bottom: 1rem;
            }
            .value-card { text-align: center; padding: 1.5rem; }
            .value-card .about-icon { margin: 0 auto 1rem; }
            .achievement-card {
                background: #fff;
                padding: 1.5rem;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            }
            .dark .achievement-card { background: #374151; }
            .team-photo { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 0.75rem; }
            .team-text { font-size: 1.25rem; color: #4b5563; max-width: 48rem; margin: 2rem auto 0; text-align: center; }
            .dark .team-text { color: #d1d5db; }
            "#}
            </style>

            <section class="about-hero">
                <h1>{"Sua ideia, conectada ao amanhã."}</h1>
                <p>
                    {"Somos uma empresa de tecnologia dedicada a criar soluções digitais inovadoras que impulsionam o sucesso dos nossos clientes."}
                </p>
            </section>

            <section class="about-section">
                <div class="stats-grid">
                    { for STATS.iter().map(|(label, value)| html! {
                        <div>
                            <div class="stat-value">{ *value }</div>
                            <div>{ *label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section mission-grid">
                <div>
                    <h2>{"Nossa Missão"}</h2>
                    <p>
                        {"Desenvolver soluções digitais inovadoras que transformem positivamente a maneira como as empresas operam e se conectam com seus clientes, sempre priorizando a excelência técnica e a satisfação do cliente."}
                    </p>
                </div>
                <div>
                    <h2>{"Nossa Visão"}</h2>
                    <p>
                        {"Ser reconhecida como referência em desenvolvimento de soluções digitais no Brasil, liderando a transformação digital das empresas através de tecnologia de ponta e resultados excepcionais."}
                    </p>
                </div>
            </section>

            <section class="about-section">
                <h2>{"Nossos Valores"}</h2>
                { highlight_grid(&VALUES, "value-card") }
            </section>

            <section class="about-section tinted">
                <h2>{"Nossas Conquistas"}</h2>
                { highlight_grid(&ACHIEVEMENTS, "achievement-card") }
            </section>

            <section class="about-section">
                <h2>{"Nossa Equipe"}</h2>
                <img
                    class="team-photo"
                    src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=1200&q=80"
                    alt="Equipe Daluthi"
                />
                <p class="team-text">
                    {"Nossa equipe é formada por profissionais apaixonados por tecnologia e inovação, sempre em busca das melhores soluções para nossos clientes."}
                </p>
            </section>
        </div>
    }
}
