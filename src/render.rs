//! Server-side rendering of the demo page.

use crate::models::LocationRecord;
use crate::tracker::TrackerSnapshot;

const STYLE: &str = r#"
        body { margin: 0; font-family: system-ui, sans-serif; color: #fff;
               background: linear-gradient(135deg, #0f172a, #581c87, #0f172a); min-height: 100vh; }
        main { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
        .card { background: rgba(255,255,255,.1); border: 1px solid rgba(255,255,255,.2);
                border-radius: .75rem; padding: 1.5rem; margin-bottom: 2rem; }
        .muted { color: #9ca3af; }
        .error { color: #f87171; }
        .seen { color: #4ade80; }
        .warning { background: rgba(202,138,4,.2); border: 1px solid rgba(234,179,8,.3);
                   border-radius: .5rem; padding: .5rem 1rem; display: inline-block; color: #fef08a; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
        .coords { font-family: monospace; background: rgba(0,0,0,.3); border-radius: .5rem; padding: .75rem; }
        .map { aspect-ratio: 1; position: relative; border-radius: .5rem; overflow: hidden;
               background: linear-gradient(135deg, #1e3a8a, #581c87); }
        .map-grid { position: absolute; inset: 0; display: grid; opacity: .2;
                    grid-template-columns: repeat(8, 1fr); grid-template-rows: repeat(8, 1fr); }
        .map-grid div { border: 1px solid rgba(255,255,255,.1); }
        .pin { position: absolute; inset: 0; display: flex; flex-direction: column;
               align-items: center; justify-content: center; }
        .pin-dot { width: 2rem; height: 2rem; border-radius: 50%; background: #ef4444; }
        .samples { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
        .samples button { text-align: left; background: rgba(255,255,255,.05); color: #fff;
                          border: 0; border-radius: .5rem; padding: 1rem; cursor: pointer; }
"#;

/// Escapes text for use inside HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a coordinate with six decimals and a degree sign.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}°", value)
}

/// Renders the full page for the given session snapshot.
pub fn page(snapshot: &TrackerSnapshot, samples: &[LocationRecord]) -> String {
    let pending = snapshot.is_pending();
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    if pending {
        html.push_str("    <meta http-equiv=\"refresh\" content=\"1\">\n");
    }
    html.push_str("    <title>Location Tracker</title>\n");
    html.push_str(&format!("    <style>{}</style>\n</head>\n<body>\n<main>\n", STYLE));

    html.push_str(&header());
    html.push_str(&search_form(snapshot, pending));

    if pending {
        html.push_str(&pending_panel());
    } else if let Some(record) = snapshot.record() {
        html.push_str("<div class=\"grid\">\n");
        html.push_str(&details_panel(record));
        html.push_str(&map_panel(record));
        html.push_str("</div>\n");
    }

    html.push_str(&samples_panel(samples, pending));
    html.push_str(
        "<p class=\"muted\" style=\"text-align:center\">This is a demonstration application created for \
         educational purposes. Real phone number tracking requires proper authorization and legal \
         compliance. All data shown is simulated and not connected to actual phone numbers or \
         locations.</p>\n",
    );
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn header() -> String {
    String::from(
        "<header style=\"text-align:center;margin-bottom:3rem\">\n\
         <h1>Location Tracker</h1>\n\
         <p class=\"muted\">Advanced phone number location tracking system - Demo Version</p>\n\
         <p class=\"warning\">This is a demonstration app with simulated data for educational purposes only</p>\n\
         </header>\n",
    )
}

fn search_form(snapshot: &TrackerSnapshot, pending: bool) -> String {
    let disabled = if pending { " disabled" } else { "" };
    let label = if pending { "Tracking..." } else { "Track Location" };

    let mut out = String::new();
    out.push_str("<section class=\"card\">\n<h2>Track Phone Number</h2>\n");
    out.push_str(
        "<p class=\"muted\">Enter a phone number to track its location (Demo mode with mock data)</p>\n",
    );
    out.push_str(&format!(
        "<form method=\"post\" action=\"/track\">\n\
         <input type=\"tel\" name=\"phone\" placeholder=\"Enter phone number (e.g., +1234567890)\" value=\"{}\"{}>\n\
         <button type=\"submit\"{}>{}</button>\n\
         </form>\n",
        escape_html(&snapshot.input),
        disabled,
        disabled,
        label
    ));
    if let Some(error) = &snapshot.error {
        out.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }
    if snapshot.record().is_some() {
        out.push_str(
            "<form method=\"post\" action=\"/reset\"><button type=\"submit\">Reset</button></form>\n",
        );
    }
    out.push_str("</section>\n");
    out
}

fn pending_panel() -> String {
    String::from(
        "<section class=\"card\" style=\"text-align:center\">\n\
         <p>Tracking location...</p>\n\
         <p class=\"muted\">Analyzing network data and GPS coordinates</p>\n\
         </section>\n",
    )
}

fn details_panel(record: &LocationRecord) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"card\">\n<h3>Location Details</h3>\n");
    out.push_str(&format!(
        "<p class=\"muted\">Tracked information for {}</p>\n",
        escape_html(&record.phone)
    ));
    out.push_str("<div class=\"grid\">\n");
    for (label, value, class) in [
        ("Country", &record.country, ""),
        ("Region", &record.region, ""),
        ("City", &record.city, ""),
        ("Carrier", &record.carrier, ""),
        ("Timezone", &record.timezone, ""),
        ("Last Seen", &record.last_seen, " class=\"seen\""),
    ] {
        out.push_str(&format!(
            "<div><p class=\"muted\">{}</p><p{}><strong>{}</strong></p></div>\n",
            label,
            class,
            escape_html(value)
        ));
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"muted\">GPS Coordinates</p>\n\
         <div class=\"coords\"><p>Lat: {}</p><p>Lng: {}</p></div>\n",
        format_coordinate(record.latitude),
        format_coordinate(record.longitude)
    ));
    out.push_str("</section>\n");
    out
}

fn map_panel(record: &LocationRecord) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"card\">\n<h3>Location Map</h3>\n");
    out.push_str("<p class=\"muted\">Approximate location visualization</p>\n");
    out.push_str("<div class=\"map\">\n<div class=\"map-grid\">");
    out.push_str(&"<div></div>".repeat(64));
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"pin\"><div class=\"pin-dot\"></div><p><strong>{}</strong></p><p class=\"muted\">{}</p></div>\n",
        escape_html(&record.city),
        escape_html(&record.country)
    ));
    out.push_str("</div>\n");
    out.push_str(
        "<p class=\"muted\" style=\"text-align:center\">Interactive map integration available in full version</p>\n",
    );
    out.push_str("</section>\n");
    out
}

fn samples_panel(samples: &[LocationRecord], pending: bool) -> String {
    let disabled = if pending { " disabled" } else { "" };
    let mut out = String::new();
    out.push_str("<section class=\"card\">\n<h3>Demo Phone Numbers</h3>\n");
    out.push_str("<p class=\"muted\">Try these sample numbers to see the tracking in action</p>\n");
    out.push_str("<div class=\"samples\">\n");
    for (index, sample) in samples.iter().enumerate() {
        out.push_str(&format!(
            "<form method=\"post\" action=\"/samples/{}\"><button type=\"submit\"{}>\
             <code>{}</code><br><small class=\"muted\">{}, {}</small></button></form>\n",
            index,
            disabled,
            escape_html(&sample.phone),
            escape_html(&sample.city),
            escape_html(&sample.country)
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}
