// ABOUTME: Page generation module for the ds-slides application
// ABOUTME: Renders the presentation page markup and the inline viewer script

use crate::assets::{AssetKind, ThemeAsset};
use crate::deck::SlideDeck;
use crate::errors::{Result, SlidesError};
use log::info;
use std::fs;
use std::path::Path;

/// Options controlling page rendering.
pub struct PageOptions {
    /// CSS theme files to include
    pub css: Vec<ThemeAsset>,

    /// JavaScript theme files to include
    pub js: Vec<ThemeAsset>,

    /// Whether to embed local asset content in the page
    pub embed_assets: bool,

    /// WebSocket URL for navigation sync. `None` renders a standalone
    /// page whose viewer script navigates locally instead.
    pub ws_url: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            css: Vec::new(),
            js: Vec::new(),
            embed_assets: true,
            ws_url: None,
        }
    }
}

/// Baseline styles so the page is presentable with no theme configured.
const BASE_CSS: &str = r#"body { font-family: sans-serif; margin: 0; background: #fff; color: #1a202c; }
.nav-bar { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: #fff; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15); padding: 0.5rem 1rem; display: flex; justify-content: space-between; align-items: center; }
.nav-bar h2 { margin: 0; font-size: 1.25rem; }
.nav-bar .controls { display: flex; align-items: center; gap: 1rem; }
.nav-bar button { padding: 0.25rem 0.75rem; border-radius: 0.375rem; border: none; cursor: pointer; background: #edf2f7; }
.nav-bar button:disabled { opacity: 0.5; cursor: not-allowed; }
.progress-track { position: fixed; top: 3rem; left: 0; right: 0; height: 4px; background: #edf2f7; }
#progress-bar { height: 100%; background: #4c51bf; transition: width 0.3s; }
.slide { display: none; min-height: 100vh; padding: 6rem 2rem 3rem; }
.slide.active { display: block; }"#;

/// Inline viewer script. `__WS_URL__` is substituted at render time; an
/// empty URL switches the script to its standalone local navigator.
const VIEWER_JS: &str = r#"(function () {
  var slides = Array.prototype.slice.call(document.querySelectorAll(".slide"));
  var prevButton = document.getElementById("prev-button");
  var nextButton = document.getElementById("next-button");
  var counter = document.getElementById("slide-counter");
  var progress = document.getElementById("progress-bar");
  var wsUrl = "__WS_URL__";

  function apply(snapshot) {
    slides.forEach(function (slide, index) {
      slide.classList.toggle("active", index === snapshot.index);
    });
    counter.textContent = (snapshot.index + 1) + "/" + snapshot.total;
    progress.style.width = (snapshot.progress * 100) + "%";
    prevButton.disabled = snapshot.is_first;
    nextButton.disabled = snapshot.is_last;
    window.scrollTo({ top: 0, behavior: "smooth" });
  }

  var sendKey;
  var sendAction;

  if (wsUrl) {
    var socket = new WebSocket(wsUrl.replace("{host}", window.location.hostname || "localhost"));
    socket.onmessage = function (event) {
      var frame = JSON.parse(event.data);
      if (frame.type === "reload") {
        window.location.reload();
        return;
      }
      apply(frame);
    };
    sendKey = function (key) {
      if (socket.readyState === WebSocket.OPEN) {
        socket.send(JSON.stringify({ key: key }));
      }
    };
    sendAction = function (action) {
      if (socket.readyState === WebSocket.OPEN) {
        socket.send(JSON.stringify({ action: action }));
      }
    };
  } else {
    var index = 0;
    var total = slides.length;
    var request = function (action) {
      if (action === "next" && index < total - 1) {
        index += 1;
      } else if (action === "prev" && index > 0) {
        index -= 1;
      } else {
        return;
      }
      apply({
        index: index,
        total: total,
        progress: (index + 1) / total,
        is_first: index === 0,
        is_last: index === total - 1
      });
    };
    sendKey = function (key) {
      if (key === "ArrowRight") { request("next"); }
      if (key === "ArrowLeft") { request("prev"); }
    };
    sendAction = request;
  }

  function onKeyDown(event) {
    if (event.key === "ArrowRight" || event.key === "ArrowLeft") {
      sendKey(event.key);
    }
  }

  window.addEventListener("keydown", onKeyDown);
  window.addEventListener("beforeunload", function () {
    window.removeEventListener("keydown", onKeyDown);
  });

  prevButton.addEventListener("click", function () { sendAction("prev"); });
  nextButton.addEventListener("click", function () { sendAction("next"); });
})();"#;

/// Escape text placed into HTML content or attribute positions.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the presentation page for a deck.
pub fn render_page(deck: &SlideDeck, options: &PageOptions) -> Result<String> {
    info!("Rendering presentation page for {} slides", deck.len());

    if deck.is_empty() {
        return Err(SlidesError::PageError(
            "Cannot render a page for an empty deck".to_string(),
        ));
    }

    let total = deck.len();
    let title = deck
        .get(0)
        .map(|slide| slide.title.clone())
        .unwrap_or_else(|| "Presentation".to_string());

    // Build the full HTML document
    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html_doc.push_str(&format!("<style>{}</style>\n", BASE_CSS));

    // Add theme CSS
    for css in &options.css {
        match css.tag(AssetKind::Css, options.embed_assets) {
            Ok(tag) => {
                html_doc.push_str(&tag);
                html_doc.push('\n');
            }
            Err(e) => {
                info!("Warning: Failed to include CSS asset {}: {}", css.path, e);
                // Continue with other assets rather than failing completely
            }
        }
    }

    html_doc.push_str("</head>\n<body>\n");

    // Navigation bar: the disabled states and the counter below are the
    // initial (index 0) state; the viewer script keeps them current.
    html_doc.push_str("<div class=\"nav-bar\">\n");
    html_doc.push_str(&format!("<h2>{}</h2>\n", escape_html(&title)));
    html_doc.push_str("<div class=\"controls\">\n");
    html_doc.push_str("<button id=\"prev-button\" disabled>Previous</button>\n");
    html_doc.push_str(&format!(
        "<span id=\"slide-counter\">1/{}</span>\n",
        total
    ));
    if total == 1 {
        html_doc.push_str("<button id=\"next-button\" disabled>Next</button>\n");
    } else {
        html_doc.push_str("<button id=\"next-button\">Next</button>\n");
    }
    html_doc.push_str("</div>\n</div>\n");

    // Progress bar, pre-sized for the first slide
    html_doc.push_str(&format!(
        "<div class=\"progress-track\"><div id=\"progress-bar\" style=\"width: {}%\"></div></div>\n",
        100.0 / total as f64
    ));

    // One section per slide; exactly the first one starts active
    for (index, slide) in deck.iter().enumerate() {
        let class = if index == 0 { "slide active" } else { "slide" };
        html_doc.push_str(&format!(
            "<section class=\"{}\" id=\"{}\">\n",
            class,
            escape_html(&slide.id)
        ));
        html_doc.push_str(&format!("<h1>{}</h1>\n", escape_html(&slide.title)));
        html_doc.push_str("</section>\n");
    }

    // Add theme JavaScript
    for js in &options.js {
        match js.tag(AssetKind::Js, options.embed_assets) {
            Ok(tag) => {
                html_doc.push_str(&tag);
                html_doc.push('\n');
            }
            Err(e) => {
                info!(
                    "Warning: Failed to include JavaScript asset {}: {}",
                    js.path, e
                );
            }
        }
    }

    // Viewer script, pointed at the sync channel when one is configured
    let ws_url = options.ws_url.as_deref().unwrap_or("");
    html_doc.push_str(&format!(
        "<script>{}</script>\n",
        VIEWER_JS.replace("__WS_URL__", ws_url)
    ));

    html_doc.push_str("</body>\n</html>");

    Ok(html_doc)
}

/// Utility function to write page content to a file
pub fn write_page_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing page to file: {:?}", output_path);

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(SlidesError::FileReadError)?;
        }
    }

    fs::write(output_path, html_content).map_err(SlidesError::FileReadError)?;

    Ok(())
}
