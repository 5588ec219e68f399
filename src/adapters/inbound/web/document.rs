use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Styles owned by the page root; the fade-in is scoped to `.page-fade-in`
pub const PAGE_CSS: &str = "
html { scroll-behavior: smooth; }
.page-fade-in { animation: page-fade-in 0.8s ease-in-out both; }
@keyframes page-fade-in { from { opacity: 0; } to { opacity: 1; } }
.star { font-size: 1rem; line-height: 1; }
.page-status { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
";

/// Wrap a rendered body in a complete HTML document
pub fn render_document(title: &str, body: &str) -> String {
    let title = view! { <title>{title.to_string()}</title> }.to_html();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {title}\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n\
         <style>{css}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = title,
        css = PAGE_CSS,
        body = body,
    )
}
