use leptos::*;
use leptos_meta::Title;

use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::Brand,
    },
    router::AppRoute,
    state::auth::use_services,
};

const PARALLAX_RANGE: f64 = 10.0;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "👥",
        title: "Connect Globally",
        description: "Build meaningful connections with people from around the world",
    },
    Feature {
        icon: "♥",
        title: "Express Yourself",
        description: "Share your thoughts, photos, and moments with your community",
    },
    Feature {
        icon: "💬",
        title: "Real Conversations",
        description: "Engage in authentic discussions that matter to you",
    },
    Feature {
        icon: "↗",
        title: "Spread Ideas",
        description: "Amplify voices and share content that inspires you",
    },
];

/// Maps a pointer position inside a `width` x `height` viewport to an offset
/// in `[-10, 10]` on each axis; the centre maps to zero.
pub fn pointer_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let axis = |position: f64, extent: f64| {
        if extent <= 0.0 || !position.is_finite() {
            return 0.0;
        }
        ((position / extent) * 2.0 * PARALLAX_RANGE - PARALLAX_RANGE)
            .clamp(-PARALLAX_RANGE, PARALLAX_RANGE)
    };
    (axis(x, width), axis(y, height))
}

fn translate(offset: (f64, f64), sign: f64) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px); transition: transform 0.3s ease-out;",
        offset.0 * sign,
        offset.1 * sign
    )
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let offset = create_rw_signal((0.0_f64, 0.0_f64));

    create_effect(move |_| {
        let handle = window_event_listener(ev::mousemove, move |ev| {
            if let Some((width, height)) = viewport_size() {
                offset.set(pointer_offset(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    width,
                    height,
                ));
            }
        });
        on_cleanup(move || handle.remove());
    });

    let to_auth = {
        let navigator = services.navigator.clone();
        move |_: ev::MouseEvent| navigator.redirect(AppRoute::Auth)
    };

    view! {
        <div class="min-h-screen bg-surface overflow-hidden">
            <Title text=AppRoute::Landing.title()/>
            <div class="fixed inset-0 -z-10" aria-hidden="true">
                <div
                    class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full bg-action-primary-bg/10 blur-3xl"
                    style=move || translate(offset.get(), 1.0)
                ></div>
                <div
                    class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-action-primary-bg/10 blur-3xl"
                    style=move || translate(offset.get(), -1.0)
                ></div>
            </div>

            <nav class="fixed top-0 w-full z-50 bg-surface-elevated/80 backdrop-blur border-b border-border">
                <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                    <Brand/>
                    <div class="flex items-center gap-4">
                        <Button variant=ButtonVariant::Outline on:click=to_auth.clone()>"Sign In"</Button>
                        <Button on:click=to_auth.clone()>"Get Started →"</Button>
                    </div>
                </div>
            </nav>

            <section class="pt-32 pb-20 px-6 text-center max-w-4xl mx-auto">
                <span class="inline-block mb-4 px-4 py-2 rounded-full border border-border text-sm font-medium">
                    "Join the Movement"
                </span>
                <h1 class="text-6xl font-bold mb-6 leading-tight text-fg">
                    "Connect"<br/>"Without Limits"
                </h1>
                <p class="text-xl text-fg-muted mb-8 max-w-2xl mx-auto">
                    "Welcome to Ronin - where authentic connections flourish. Share your story, discover new perspectives, and build a community that matters."
                </p>
                <Button class="text-lg px-8 py-4" on:click=to_auth.clone()>"Join Ronin →"</Button>
            </section>

            <section class="py-20 px-6 max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold mb-4 text-center text-fg">"Why Choose Ronin"</h2>
                <p class="text-xl text-fg-muted text-center mb-16">
                    "A social platform designed for genuine human connection"
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
                                <div class="h-12 w-12 rounded-xl flex items-center justify-center mb-4 text-2xl" aria-hidden="true">
                                    {feature.icon}
                                </div>
                                <h3 class="text-xl font-semibold mb-2 text-fg">{feature.title}</h3>
                                <p class="text-fg-muted">{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-20 px-6 text-center">
                <h2 class="text-4xl font-bold mb-6 text-fg">"Ready to Connect?"</h2>
                <p class="text-xl text-fg-muted mb-8">
                    "Join thousands already building meaningful connections on Ronin"
                </p>
                <Button class="text-lg px-10 py-4" on:click=to_auth>"Start Your Journey →"</Button>
            </section>

            <footer class="py-12 px-6 border-t border-border">
                <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between items-center gap-4">
                    <Brand/>
                    <p class="text-sm text-fg-muted">"© 2025 Ronin. Connect authentically."</p>
                </div>
            </footer>
        </div>
    }
}
