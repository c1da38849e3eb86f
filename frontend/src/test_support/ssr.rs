use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Whether rendered markup carries the attribute `name`, ignoring utility
/// classes such as `disabled:opacity-50`.
#[cfg(not(target_arch = "wasm32"))]
pub fn has_attribute(html: &str, name: &str) -> bool {
    let needle = format!(" {}", name);
    html.match_indices(&needle).any(|(at, found)| {
        matches!(
            html[at + found.len()..].chars().next(),
            Some('=') | Some('>') | Some(' ') | Some('/')
        )
    })
}
