//! Leaflet map of the result set, driven through `document::eval`.

use common::result_view::{MapFocus, MapMarker, map_markers};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::Serialize;

use crate::pages::restaurants_page::RestaurantsPageState;

const MAP_ELEMENT_ID: &str = "x-restaurant-map";
const PAYLOAD_PLACEHOLDER: &str = "__PAYLOAD__";

/// Waits for Leaflet and the map element, creating the map on first use.
const WITH_MAP_JS: &str = r#"
const payload = __PAYLOAD__;
function withMap(run) {
    const started = Date.now();
    (function attempt() {
        const el = document.getElementById(payload.element_id);
        if (window.L && el) {
            if (!el._restaurantMap) {
                el._restaurantMap = L.map(el).setView([0, 0], 2);
                L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
                    attribution: "&copy; OpenStreetMap contributors",
                }).addTo(el._restaurantMap);
                el._restaurantMarkers = L.layerGroup().addTo(el._restaurantMap);
            }
            run(el._restaurantMap, el._restaurantMarkers);
        } else if (Date.now() - started < 10000) {
            setTimeout(attempt, 100);
        }
    })();
}
"#;

const SET_MARKERS_JS: &str = r#"
withMap(function (map, layer) {
    layer.clearLayers();
    for (const m of payload.markers) {
        const popup = document.createElement("div");
        const title = document.createElement("strong");
        title.textContent = m.title;
        popup.appendChild(title);
        for (const [label, value] of m.details) {
            const line = document.createElement("div");
            line.textContent = label + ": " + value;
            popup.appendChild(line);
        }
        L.marker([m.latitude, m.longitude]).bindPopup(popup).addTo(layer);
    }
});
"#;

const SET_FOCUS_JS: &str = r#"
withMap(function (map) {
    const f = payload.focus;
    if (f.transition_secs !== null) {
        map.flyTo([f.latitude, f.longitude], f.zoom, { duration: f.transition_secs });
    } else {
        map.setView([f.latitude, f.longitude], f.zoom);
    }
});
"#;

#[derive(Serialize)]
struct MarkersPayload<'a> {
    element_id: &'a str,
    markers: &'a [MapMarker],
}

#[derive(Serialize)]
struct FocusPayload<'a> {
    element_id: &'a str,
    focus: &'a MapFocus,
}

fn map_script<P: Serialize>(payload: &P, body: &str) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_string(payload)?;
    Ok(format!("{}{}", WITH_MAP_JS.replace(PAYLOAD_PLACEHOLDER, &payload), body))
}

fn run_map_script(script: Result<String, serde_json::Error>) {
    let script = match script {
        Ok(script) => script,
        Err(e) => {
            warn!("could not encode map payload: {e}");
            return;
        }
    };
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            warn!("map update failed: {e:?}");
        }
    });
}

#[component]
pub fn RestaurantMap() -> Element {
    let page = use_context::<RestaurantsPageState>();
    let markers = use_memo(move || map_markers(&page.results.read()));
    let focus = use_memo(move || MapFocus::for_results(&page.results.read()));

    use_effect(move || {
        let markers = markers.read();
        run_map_script(map_script(&MarkersPayload { element_id: MAP_ELEMENT_ID, markers: &markers }, SET_MARKERS_JS));
    });
    use_effect(move || {
        let focus = focus.read();
        run_map_script(map_script(&FocusPayload { element_id: MAP_ELEMENT_ID, focus: &focus }, SET_FOCUS_JS));
    });

    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 8px;",
            h2 { style: "margin: 0; color:#01579b;", "Map" }
            div {
                id: MAP_ELEMENT_ID,
                style: "height: 420px; width: 100%; border-radius: 8px; border: 1px solid #B3E5FC;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_script_embeds_payload_once() {
        let focus = MapFocus { latitude: 48.85, longitude: 2.35, zoom: 10, transition_secs: Some(0.5) };
        let script = map_script(&FocusPayload { element_id: MAP_ELEMENT_ID, focus: &focus }, SET_FOCUS_JS).unwrap();
        assert!(!script.contains(PAYLOAD_PLACEHOLDER));
        assert!(script.contains(r#""latitude":48.85"#));
        assert!(script.contains(r#""transition_secs":0.5"#));
        assert!(script.contains("flyTo"));
    }

    #[test]
    fn marker_details_serialize_as_pairs() {
        let marker = MapMarker {
            key: "pos-0".into(),
            latitude: 1.0,
            longitude: 2.0,
            title: "</script><b>Joe's</b>".into(),
            details: vec![("City".into(), "Paris".into())],
        };
        let markers = [marker];
        let script = map_script(&MarkersPayload { element_id: MAP_ELEMENT_ID, markers: &markers }, SET_MARKERS_JS).unwrap();
        assert!(script.contains(r#"[["City","Paris"]]"#));
        assert!(script.contains("textContent"));
    }
}
