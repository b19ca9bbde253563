//! Route helpers shared by smooth scrolling and menu highlighting

/// Hrefs that point at the home page
const HOME_ALIASES: &[&str] = &["/", "/index.html", "index.html", ""];

/// Whether a location pathname is the site's home page
pub fn is_home_route(pathname: &str) -> bool {
    pathname == "/" || pathname == "/index.html" || pathname.ends_with("/index.html")
}

/// Whether a raw link href names the home page
pub fn is_home_alias(href: &str) -> bool {
    HOME_ALIASES.contains(&href)
}

/// Path part of a link href with a leading `./` or `/` removed;
/// `index.html` collapses to the empty string
pub fn normalize_link_path(href: &str) -> &str {
    let path = href.split('#').next().unwrap_or_default();
    let path = path
        .strip_prefix("./")
        .or_else(|| path.strip_prefix('/'))
        .unwrap_or(path);
    canonical(path)
}

/// Location pathname with the leading `/` removed; `index.html`
/// collapses to the empty string
pub fn normalize_current_path(pathname: &str) -> &str {
    canonical(pathname.strip_prefix('/').unwrap_or(pathname))
}

fn canonical(path: &str) -> &str {
    if path == "index.html" { "" } else { path }
}
