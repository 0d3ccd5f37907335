pub const BUILTIN_CSS: &str = include_str!("builtin.css");

pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="675" viewBox="0 0 1200 675" fill="none">
  <rect width="1200" height="675" fill="#EAEAEA"/>
  <g opacity=".5">
    <path fill="#FAFAFA" d="M600.7 225.5 512 375h177.4L600.7 225.5Z"/>
    <circle cx="690" cy="260" r="34" fill="#FAFAFA"/>
  </g>
</svg>
"##;

pub const THEME_TOGGLE_JS: &str = r#"(function () {
  var storageKey = "folio-theme";
  var root = document.documentElement;
  var button = document.getElementById("theme-toggle");

  function preferredTheme() {
    try {
      return window.matchMedia && window.matchMedia("(prefers-color-scheme: dark)").matches
        ? "dark"
        : "light";
    } catch (_) {
      return "light";
    }
  }

  function effectiveTheme() {
    return root.getAttribute("data-theme") || preferredTheme();
  }

  function updateButton() {
    if (!button) return;
    var next = effectiveTheme() === "dark" ? "light" : "dark";
    button.textContent = next === "dark" ? "Dark" : "Light";
    button.setAttribute("aria-label", "Switch to " + next + " theme");
  }

  function apply(theme) {
    if (theme === "light" || theme === "dark") {
      root.setAttribute("data-theme", theme);
    } else {
      root.removeAttribute("data-theme");
    }
    updateButton();
  }

  var saved = null;
  try {
    saved = localStorage.getItem(storageKey);
  } catch (_) {
    saved = null;
  }
  apply(saved);

  if (button) {
    button.addEventListener("click", function () {
      var next = effectiveTheme() === "dark" ? "light" : "dark";
      try {
        localStorage.setItem(storageKey, next);
      } catch (_) {}
      apply(next);
    });
  }
})();"#;

/// Re-applies the blog search on every keystroke against each card's
/// lowercased `data-search` text, the same predicate the renderer uses.
pub const SEARCH_JS: &str = r##"(function () {
  var input = document.getElementById("post-search");
  if (!input) return;
  var empty = document.getElementById("post-empty");

  function apply() {
    var q = input.value.toLowerCase();
    var shown = 0;
    var cards = document.querySelectorAll("#post-grid [data-search]");
    for (var i = 0; i < cards.length; i++) {
      var fields = cards[i].getAttribute("data-search").split("\n");
      var hit = q === "" || fields.some(function (f) { return f.indexOf(q) !== -1; });
      cards[i].hidden = !hit;
      if (hit) shown++;
    }
    var articles = document.querySelectorAll("#article-grid [data-search]");
    for (var j = 0; j < articles.length; j++) {
      var parts = articles[j].getAttribute("data-search").split("\n");
      articles[j].hidden = !(q === "" || parts.some(function (f) { return f.indexOf(q) !== -1; }));
    }
    if (empty) empty.hidden = shown !== 0;
  }

  input.addEventListener("input", apply);
  apply();
})();"##;
