//! HTML for the three views. Every response is a full page rendered from
//! scratch, so nothing carries over from a previously selected view.

use std::fmt::Write;
use h360_core::content::{
    Recommendation, View, APP_NAME, FOOTER, IMAGE_WIDTH, MENU_PROMPT, MENU_TITLE, PAGE_ICON,
    PAGE_TITLE,
};
use h360_core::widgets::{
    Choice, ChoiceWidget, NumericKind, NumericWidget, AGE, BLOOD_PRESSURE, CHOLESTEROL, EXERCISE_ANGINA,
    MAX_HEART_RATE, SEX,
};
use h360_core::{PredictionOutcome, PredictionRequest};

const STYLE: &str = "\
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
aside { width: 240px; padding: 1.5rem; background: #f0f2f6; }
main { flex: 1; max-width: 730px; margin: 0 auto; padding: 2rem; }
label { display: block; margin-top: 1rem; }
input, select { width: 100%; }
footer { margin-top: 3rem; color: #666; }";

pub fn render_view(view: View, request: &PredictionRequest) -> String {
    match view {
        View::Home | View::About => page(Some(view), &static_view(view)),
        View::Prediction => prediction_page(request, None),
    }
}

pub fn prediction_page(request: &PredictionRequest, outcome: Option<&PredictionOutcome>) -> String {
    let mut main = format!("<h1>{}</h1>\n", View::Prediction.title());
    main.push_str(&prediction_form(request));
    if let Some(outcome) = outcome {
        main.push_str(&result_block(outcome));
    }
    page(Some(View::Prediction), &main)
}

pub fn not_found_page(requested: &str) -> String {
    let main = format!(
        "<h1>Page not found</h1>\n<p>Nothing is served at <code>{}</code>. Pick a view from the menu.</p>\n",
        escape(requested)
    );
    page(None, &main)
}

fn page(selected: Option<View>, main: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"application-name\" content=\"{app}\">
<title>{title}</title>
<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>\">
<style>{style}</style>
</head>
<body>
{sidebar}<main>
{main}<footer>{footer}</footer>
</main>
</body>
</html>
",
        app = APP_NAME,
        title = PAGE_TITLE,
        icon = PAGE_ICON,
        style = STYLE,
        sidebar = sidebar(selected),
        main = main,
        footer = FOOTER,
    )
}

/// With no selected view a disabled placeholder heads the list.
fn sidebar(selected: Option<View>) -> String {
    let mut options = String::new();
    if selected.is_none() {
        let _ = writeln!(options, "<option value=\"\" selected disabled>{}</option>", MENU_PROMPT);
    }
    for view in View::ALL {
        let marker = if Some(view) == selected { " selected" } else { "" };
        let _ = writeln!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            view.slug(),
            marker,
            view.menu_label()
        );
    }
    format!(
        "<aside>
<h2>{}</h2>
<form method=\"get\" action=\"/\">
<label for=\"view\">{}</label>
<select id=\"view\" name=\"view\" onchange=\"this.form.submit()\">
{}</select>
<noscript><button type=\"submit\">Go</button></noscript>
</form>
</aside>
",
        MENU_TITLE, MENU_PROMPT, options
    )
}

fn static_view(view: View) -> String {
    let mut main = format!("<h1>{}</h1>\n", view.title());
    for paragraph in view.body() {
        let _ = writeln!(main, "<p>{}</p>", inline_markup(paragraph));
    }
    main
}

fn prediction_form(request: &PredictionRequest) -> String {
    let mut form = String::from("<form method=\"post\" action=\"/predict\">\n");
    form.push_str(&numeric_input(&AGE, request.age));
    form.push_str(&choice_input(&SEX, request.sex));
    form.push_str(&numeric_input(&CHOLESTEROL, request.cholesterol));
    form.push_str(&numeric_input(&BLOOD_PRESSURE, request.blood_pressure));
    form.push_str(&numeric_input(&MAX_HEART_RATE, request.max_heart_rate));
    form.push_str(&choice_input(&EXERCISE_ANGINA, request.exercise_angina));
    form.push_str("<p><button type=\"submit\">Predict</button></p>\n</form>\n");
    form
}

fn numeric_input(widget: &NumericWidget, value: u32) -> String {
    match widget.kind {
        NumericKind::NumberInput => format!(
            "<label for=\"{field}\">{label}</label>\n\
             <input type=\"number\" id=\"{field}\" name=\"{field}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" required>\n",
            field = widget.field,
            label = widget.label,
            min = widget.min,
            max = widget.max,
            value = value,
        ),
        NumericKind::Slider => format!(
            "<label for=\"{field}\">{label}: <output id=\"{field}_value\">{value}</output></label>\n\
             <input type=\"range\" id=\"{field}\" name=\"{field}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" \
             oninput=\"document.getElementById('{field}_value').value = this.value\">\n",
            field = widget.field,
            label = widget.label,
            min = widget.min,
            max = widget.max,
            value = value,
        ),
    }
}

fn choice_input<T: Choice>(widget: &ChoiceWidget<T>, selected: T) -> String {
    let mut html = format!(
        "<label for=\"{field}\">{label}</label>\n<select id=\"{field}\" name=\"{field}\">\n",
        field = widget.field,
        label = widget.label,
    );
    for &option in widget.options {
        let marker = if option == selected { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{0}\"{1}>{0}</option>", option.label(), marker);
    }
    html.push_str("</select>\n");
    html
}

fn result_block(outcome: &PredictionOutcome) -> String {
    let block: &Recommendation = Recommendation::for_risk(outcome.risk);
    let mut html = format!(
        "<section class=\"result\" data-risk=\"{risk}\">
<div style=\"background-color: {accent}; padding: 10px; border-radius: 10px; color: white;\">
<h2><span style=\"font-size:30px;\">{banner}</span></h2>
</div>
<h3>{heading}</h3>
<ul>
",
        risk = outcome.risk.as_str(),
        accent = block.accent,
        banner = block.banner,
        heading = escape(block.heading),
    );
    for tip in block.tips {
        let _ = writeln!(html, "<li>{}</li>", inline_markup(tip));
    }
    let _ = write!(
        html,
        "</ul>\n<img src=\"{}\" width=\"{}\" alt=\"{}\">\n</section>\n",
        block.image_url,
        IMAGE_WIDTH,
        outcome.risk.label()
    );
    html
}

/// Turn `**bold**` and `[text](url)` into HTML; everything else is escaped.
pub fn inline_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;
    let mut bold = false;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            out.push_str(if bold { "</strong>" } else { "<strong>" });
            bold = !bold;
            rest = after;
            continue;
        }
        if let Some((link, after)) = parse_link(rest) {
            out.push_str(&link);
            rest = after;
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            push_escaped(&mut out, c);
        }
        rest = chars.as_str();
    }
    if bold {
        out.push_str("</strong>");
    }
    out
}

fn parse_link(text: &str) -> Option<(String, &str)> {
    let inner = text.strip_prefix('[')?;
    let close = inner.find("](")?;
    let label = &inner[..close];
    let tail = &inner[close + 2..];
    let end = tail.find(')')?;
    let href = &tail[..end];
    Some((
        format!("<a href=\"{}\" target=\"_blank\">{}</a>", escape(href), escape(label)),
        &tail[end + 1..],
    ))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
