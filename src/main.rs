use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod quote {
    pub mod catalog;
    pub mod contact;
    pub mod estimate;
    pub mod selection;
    pub mod sink;
    pub mod wizard;
}
mod components {
    pub mod icons;
    pub mod quote_modal;
}
mod pages {
    pub mod home;
    pub mod about;
}

use components::icons::{Glyph, Icon};
use components::quote_modal::QuoteModal;
use pages::{about::About, home::Home};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sobre")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(route: Route, on_open_quote: Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {on_open_quote} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Unknown route, falling back to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub dark: bool,
    pub menu_open: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_open_quote: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|e| e.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > 20);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let emit_on_click = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            callback.emit(());
        })
    };
    let toggle_theme = emit_on_click(&props.on_toggle_theme);
    let toggle_menu = emit_on_click(&props.on_toggle_menu);
    let open_quote = emit_on_click(&props.on_open_quote);
    let close_menu = {
        let on_close_menu = props.on_close_menu.clone();
        Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
    };

    let theme_icon = if props.dark { Icon::Sun } else { Icon::Moon };
    let menu_class = if props.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"D"}</span>
                    <span class="nav-logo-text">{ config::COMPANY_NAME }</span>
                </Link<Route>>

                <div class="nav-tools">
                    <button class="nav-icon-button" onclick={toggle_theme}>
                        <Glyph icon={theme_icon} size={20} />
                    </button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <Glyph icon={if props.menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
                <div class={menu_class}>
                    <a href="/#services" class="nav-link" onclick={close_menu.clone()}>{"Serviços"}</a>
                    <a href="/#portfolio" class="nav-link" onclick={close_menu.clone()}>{"Portfólio"}</a>
                    <a href="/#contact" class="nav-link" onclick={close_menu.clone()}>{"Contato"}</a>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"Sobre"}
                        </Link<Route>>
                    </div>
                    <button class="nav-quote-button" onclick={open_quote}>
                        {"Solicitar Orçamento"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="nav-logo">
                        <span class="nav-logo-mark">{"D"}</span>
                        <span class="nav-logo-text">{ config::COMPANY_NAME }</span>
                    </div>
                    <p>{"Soluções digitais inovadoras para impulsionar o seu negócio"}</p>
                </div>
                <div>
                    <h3>{"Navegação"}</h3>
                    <ul>
                        <li><a href="/#services">{"Serviços"}</a></li>
                        <li><a href="/#portfolio">{"Portfólio"}</a></li>
                        <li><a href="/#contact">{"Contato"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Serviços"}</h3>
                    <ul>
                        <li>{"Desenvolvimento Web"}</li>
                        <li>{"Aplicativos Mobile"}</li>
                        <li>{"Sistemas Empresariais"}</li>
                        <li>{"Consultoria"}</li>
                    </ul>
                </div>
                <div>
                    <h3>{"Contato"}</h3>
                    <ul>
                        <li>{ config::CONTACT_EMAIL }</li>
                        <li>{ config::CONTACT_PHONE }</li>
                        <li>{ config::CONTACT_CITY }</li>
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <p>{ format!("© 2024 {}. Todos os direitos reservados.", config::COMPANY_NAME) }</p>
            </div>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    let dark = use_state(|| false);
    let menu_open = use_state(|| false);
    let quote_open = use_state(|| false);

    {
        use_effect_with_deps(move |dark| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.class_list().toggle_with_force("dark", *dark);
            }
            || ()
        }, *dark);
    }

    let on_toggle_theme = {
        let dark = dark.clone();
        Callback::from(move |_: ()| dark.set(!*dark))
    };
    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };
    let on_close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let on_open_quote = {
        let quote_open = quote_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            if !*quote_open {
                info!("Opening quote wizard");
                quote_open.set(true);
            }
        })
    };
    let on_close_quote = {
        let quote_open = quote_open.clone();
        Callback::from(move |_: ()| quote_open.set(false))
    };

    let render = {
        let on_open_quote = on_open_quote.clone();
        move |route: Route| switch(route, on_open_quote.clone())
    };

    html! {
        <BrowserRouter>
            <style>
            {r#"
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: #fff;
                color: #111827;
                transition: background 0.2s ease, color 0.2s ease;
            }
            .dark body {
                background: #111827;
                color: #fff;
            }
            .top-nav {
                position: fixed;
                width: 100%;
                z-index: 40;
                background: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(4px);
                border-bottom: 1px solid #f3f4f6;
            }
            .dark .top-nav {
                background: rgba(17, 24, 39, 0.8);
                border-bottom-color: #1f2937;
            }
            .top-nav.scrolled {
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            }
            .nav-content {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1rem;
                height: 5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                text-decoration: none;
                margin-bottom: 1.5rem;
            }
            .top-nav .nav-logo { margin-bottom: 0; }
            .nav-logo-mark {
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 0.75rem;
                background: #2563eb;
                color: #fff;
                font-weight: 700;
                font-size: 1.25rem;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .nav-logo-text {
                font-size: 1.5rem;
                font-weight: 700;
                background: linear-gradient(90deg, #2563eb, #60a5fa);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                color: inherit;
                text-decoration: none;
            }
            .nav-link:hover { color: #2563eb; }
            .nav-tools {
                display: flex;
                align-items: center;
                gap: 1rem;
                order: 3;
            }
            .nav-icon-button,
            .burger-menu {
                background: none;
                border: none;
                color: inherit;
                padding: 0.5rem;
                border-radius: 9999px;
                cursor: pointer;
            }
            .burger-menu { display: none; }
            .nav-quote-button {
                background: #2563eb;
                color: #fff;
                border: none;
                padding: 0.625rem 1.5rem;
                border-radius: 0.75rem;
                cursor: pointer;
            }
            .site-footer {
                border-top: 1px solid #f3f4f6;
                padding: 3rem 1rem;
            }
            .dark .site-footer { border-top-color: #1f2937; }
            .footer-grid {
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 2rem;
            }
            .site-footer ul { list-style: none; padding: 0; }
            .site-footer li, .site-footer p { color: #4b5563; margin-bottom: 0.5rem; }
            .dark .site-footer li, .dark .site-footer p { color: #d1d5db; }
            .site-footer a { color: inherit; text-decoration: none; }
            .footer-legal {
                border-top: 1px solid #f3f4f6;
                margin-top: 3rem;
                padding-top: 2rem;
                text-align: center;
            }
            @media (max-width: 768px) {
                .burger-menu { display: block; }
                .nav-right { display: none; }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    align-items: stretch;
                    gap: 1rem;
                    position: absolute;
                    top: 5rem;
                    left: 0;
                    right: 0;
                    padding: 1.5rem 1rem;
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                }
                .dark .nav-right.mobile-menu-open { background: #111827; }
            }
            "#}
            </style>
            <Nav
                dark={*dark}
                menu_open={*menu_open}
                {on_toggle_theme}
                {on_toggle_menu}
                {on_close_menu}
                {on_open_quote}
            />
            <Switch<Route> {render} />
            <Footer />
            <QuoteModal is_open={*quote_open} on_close={on_close_quote} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
