use yew::prelude::*;

use crate::quote::catalog::ServiceIcon;

/// Line icons used across the site, drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Monitor,
    Smartphone,
    Settings,
    Close,
    Upload,
    Check,
    ChevronRight,
    Menu,
    Sun,
    Moon,
    Code,
    Users,
    Target,
    Rocket,
    Award,
    TrendingUp,
}

impl From<ServiceIcon> for Icon {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Monitor => Icon::Monitor,
            ServiceIcon::Smartphone => Icon::Smartphone,
            ServiceIcon::Settings => Icon::Settings,
        }
    }
}

enum Shape {
    Path(&'static str),
    Circle(u8, u8, u8),
    Rect { x: u8, y: u8, w: u8, h: u8, rx: u8 },
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Monitor => &[
                Rect { x: 2, y: 3, w: 20, h: 14, rx: 2 },
                Path("M8 21h8"),
                Path("M12 17v4"),
            ],
            Icon::Smartphone => &[
                Rect { x: 5, y: 2, w: 14, h: 20, rx: 2 },
                Path("M12 18h.01"),
            ],
            Icon::Settings => &[
                Path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
                Circle(12, 12, 3),
            ],
            Icon::Close => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            Icon::Upload => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Path("m17 8-5-5-5 5"),
                Path("M12 3v12"),
            ],
            Icon::Check => &[Path("M20 6 9 17l-5-5")],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::Menu => &[Path("M4 6h16"), Path("M4 12h16"), Path("M4 18h16")],
            Icon::Sun => &[
                Circle(12, 12, 4),
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            Icon::Code => &[
                Path("m18 16 4-4-4-4"),
                Path("m6 8-4 4 4 4"),
                Path("m14.5 4-5 16"),
            ],
            Icon::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle(9, 7, 4),
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Target => &[Circle(12, 12, 10), Circle(12, 12, 6), Circle(12, 12, 2)],
            Icon::Rocket => &[
                Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"),
                Path("m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"),
                Path("M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"),
                Path("M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
            ],
            Icon::Award => &[
                Circle(12, 8, 6),
                Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::TrendingUp => &[Path("M22 7 13.5 15.5 8.5 10.5 2 17"), Path("M16 7h6v6")],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { for props.icon.shapes().iter().map(|shape| match shape {
                Shape::Path(d) => html! { <path d={*d} /> },
                Shape::Circle(cx, cy, r) => html! {
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
                },
                Shape::Rect { x, y, w, h, rx } => html! {
                    <rect
                        x={x.to_string()}
                        y={y.to_string()}
                        width={w.to_string()}
                        height={h.to_string()}
                        rx={rx.to_string()}
                    />
                },
            }) }
        </svg>
    }
}
