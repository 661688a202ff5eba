use crate::config::Credentials;
use crate::constants::*;
use crate::models::TrustedHtml;
use crate::provider::ProviderKey;

/// Renders a map fragment with placeholder credentials
pub fn render(latitude: f64, longitude: f64, provider: &str) -> TrustedHtml {
    render_with(&Credentials::default(), latitude, longitude, provider)
}

/// Renders a map fragment, interpolating the given credentials.
///
/// The output is the map container followed by either one provider block
/// or the unsupported-provider paragraph. `provider` never reaches the output.
pub fn render_with(
    credentials: &Credentials,
    latitude: f64,
    longitude: f64,
    provider: &str,
) -> TrustedHtml {
    let mut output = String::from(MAP_CONTAINER);

    match ProviderKey::parse(provider) {
        Some(provider) => {
            output.push_str(&provider_block(provider, credentials, latitude, longitude));
        }
        None => output.push_str(UNSUPPORTED_PROVIDER),
    }

    TrustedHtml::new(output)
}

/// Formats a coordinate as a JS number literal. Values are not clamped.
fn js_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

fn provider_block(
    provider: ProviderKey,
    credentials: &Credentials,
    latitude: f64,
    longitude: f64,
) -> String {
    let key = credentials.get(provider).unwrap_or_default();
    let lat = js_number(latitude);
    let lng = js_number(longitude);

    // array-style centers, in the order the SDK expects
    let point = if provider.is_lng_lat() {
        format!("{lng}, {lat}")
    } else {
        format!("{lat}, {lng}")
    };

    match provider {
        ProviderKey::Google => google(key, &lat, &lng),
        ProviderKey::CedarMaps => cedarmaps(key, &point),
        ProviderKey::Neshan => neshan(key, &point),
        ProviderKey::MapIr => mapir(key, &point),
        ProviderKey::ParsiMap => parsimap(key, &point),
        ProviderKey::Mapbox => mapbox(key, &point),
        ProviderKey::Osm => osm(&point),
        ProviderKey::Bing => bing(key, &lat, &lng),
        ProviderKey::Yandex => yandex(key, &point),
    }
}

fn google(key: &str, lat: &str, lng: &str) -> String {
    format!(
        r#"
<script>
  function initMap() {{
    var location = {{lat: {lat}, lng: {lng}}};
    var map = new google.maps.Map(document.getElementById('map'), {{
      zoom: {DEFAULT_ZOOM},
      center: location
    }});
    var marker = new google.maps.Marker({{
      position: location,
      map: map
    }});
  }}
</script>
<script src='{GOOGLE_MAPS_JS}?key={key}&callback=initMap' async defer></script>
"#
    )
}

fn cedarmaps(token: &str, point: &str) -> String {
    format!(
        r#"
<link href='{CEDARMAPS_SDK_BASE}/cedarmaps.css' rel='stylesheet' />
<script src='{CEDARMAPS_SDK_BASE}/cedarmaps.js'></script>
<script>
  L.cedarmaps.accessToken = '{token}';
  var map = L.cedarmaps.map('map', '{CEDARMAPS_TILES}?access_token={token}', {{
    center: [{point}],
    zoom: {DEFAULT_ZOOM}
  }});
  var marker = L.marker([{point}]).addTo(map);
</script>
"#
    )
}

fn neshan(key: &str, point: &str) -> String {
    format!(
        r#"
<link href='{NESHAN_SDK_BASE}/leaflet.css' rel='stylesheet' type='text/css'>
<script src='{NESHAN_SDK_BASE}/leaflet.js' type='text/javascript'></script>
<script>
  var map = new L.Map('map', {{
    key: '{key}',
    maptype: 'dreamy',
    poi: true,
    traffic: false,
    center: [{point}],
    zoom: {NESHAN_ZOOM}
  }});
  var marker = L.marker([{point}]).addTo(map);
</script>
"#
    )
}

fn mapir(token: &str, point: &str) -> String {
    format!(
        r#"
<script src='{MAPIR_SDK_BASE}/mapbox-gl.js'></script>
<link rel='stylesheet' href='{MAPIR_SDK_BASE}/mapbox-gl.css' />
<script>
  mapboxgl.accessToken = '{token}';
  var map = new mapboxgl.Map({{
    container: 'map',
    style: '{MAPIR_STYLE}',
    center: [{point}],
    zoom: {DEFAULT_ZOOM}
  }});
  new mapboxgl.Marker().setLngLat([{point}]).addTo(map);
</script>
"#
    )
}

fn parsimap(key: &str, point: &str) -> String {
    format!(
        r#"
<script src='{PARSIMAP_SDK}'></script>
<script>
  var map = L.map('map').setView([{point}], {DEFAULT_ZOOM});
  L.tileLayer('{PARSIMAP_TILES}?key={key}', {{
    maxZoom: 18,
  }}).addTo(map);
  var marker = L.marker([{point}]).addTo(map);
</script>
"#
    )
}

fn mapbox(token: &str, point: &str) -> String {
    format!(
        r#"
<script src='{MAPBOX_SDK_BASE}/mapbox-gl.js'></script>
<link href='{MAPBOX_SDK_BASE}/mapbox-gl.css' rel='stylesheet' />
<script>
  mapboxgl.accessToken = '{token}';
  var map = new mapboxgl.Map({{
    container: 'map',
    style: '{MAPBOX_STYLE}',
    center: [{point}],
    zoom: {DEFAULT_ZOOM}
  }});
  new mapboxgl.Marker().setLngLat([{point}]).addTo(map);
</script>
"#
    )
}

fn osm(point: &str) -> String {
    format!(
        r#"
<link rel='stylesheet' href='{LEAFLET_SDK_BASE}/leaflet.css' />
<script src='{LEAFLET_SDK_BASE}/leaflet.js'></script>
<script>
  var map = L.map('map').setView([{point}], {DEFAULT_ZOOM});
  L.tileLayer('{OSM_TILES}', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }}).addTo(map);
  var marker = L.marker([{point}]).addTo(map);
</script>
"#
    )
}

fn bing(key: &str, lat: &str, lng: &str) -> String {
    format!(
        r#"
<script type='text/javascript' src='{BING_MAP_CONTROL}?callback=GetMap&key={key}' async defer></script>
<script>
  function GetMap() {{
    var map = new Microsoft.Maps.Map('#map', {{
      center: new Microsoft.Maps.Location({lat}, {lng}),
      zoom: {DEFAULT_ZOOM}
    }});
    var pin = new Microsoft.Maps.Pushpin(map.getCenter(), {{
      title: 'Location'
    }});
    map.entities.push(pin);
  }}
</script>
"#
    )
}

fn yandex(key: &str, point: &str) -> String {
    format!(
        r#"
<script src='{YANDEX_MAPS_API}?apikey={key}&lang=en_US' type='text/javascript'></script>
<script>
  ymaps.ready(init);
  function init() {{
    var myMap = new ymaps.Map('map', {{
      center: [{point}],
      zoom: {DEFAULT_ZOOM}
    }});
    var myPlacemark = new ymaps.Placemark([{point}], {{
      hintContent: 'Location',
      balloonContent: 'Selected Location'
    }});
    myMap.geoObjects.add(myPlacemark);
  }}
</script>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::list_providers;

    const TEHRAN: (f64, f64) = (35.7, 51.4);

    fn render_at(provider: &str) -> String {
        render(TEHRAN.0, TEHRAN.1, provider).into_string()
    }

    #[test]
    fn every_provider_gets_one_container_and_a_script_block() {
        for entry in list_providers() {
            let html = render_at(entry.key);
            assert!(html.starts_with(MAP_CONTAINER), "{}", entry.key);
            assert_eq!(html.matches("<div id='map'").count(), 1, "{}", entry.key);
            assert!(html[MAP_CONTAINER.len()..].contains("<script"), "{}", entry.key);
            assert!(!html.contains(UNSUPPORTED_PROVIDER), "{}", entry.key);
        }
    }

    #[test]
    fn unknown_provider_falls_back_without_script() {
        let html = render_at("foo");
        assert_eq!(html, format!("{MAP_CONTAINER}{UNSUPPORTED_PROVIDER}"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn provider_string_is_never_echoed() {
        let html = render_at("<script>alert(1)</script>");
        assert!(!html.contains("alert"));
    }

    #[test]
    fn empty_provider_renders_google() {
        assert_eq!(render_at(""), render_at("google"));
        assert!(render_at("").contains("google.maps.Map"));
    }

    #[test]
    fn provider_match_ignores_case() {
        assert_eq!(render_at("Yandex"), render_at("yandex"));
        assert_eq!(render_at("MAPBOX"), render_at("mapbox"));
    }

    #[test]
    fn mapir_and_mapbox_put_longitude_first() {
        for provider in ["mapir", "mapbox"] {
            let html = render_at(provider);
            assert!(html.contains("center: [51.4, 35.7]"), "{provider}");
            assert!(html.contains("setLngLat([51.4, 35.7])"), "{provider}");
            assert!(!html.contains("[35.7, 51.4]"), "{provider}");
        }
    }

    #[test]
    fn other_providers_put_latitude_first() {
        for provider in ["cedarmaps", "neshan", "parsimap", "osm", "yandex"] {
            let html = render_at(provider);
            assert!(html.contains("[35.7, 51.4]"), "{provider}");
            assert!(!html.contains("[51.4, 35.7]"), "{provider}");
        }

        assert!(render_at("google").contains("{lat: 35.7, lng: 51.4}"));
        assert!(render_at("bing").contains("Microsoft.Maps.Location(35.7, 51.4)"));
    }

    #[test]
    fn neshan_zooms_out_one_level() {
        for entry in list_providers() {
            let html = render_at(entry.key);
            let expected = if entry.key == "neshan" { NESHAN_ZOOM } else { DEFAULT_ZOOM };
            let zoom = format!("{expected}");
            assert!(
                html.contains(&format!("zoom: {zoom}")) || html.contains(&format!("], {zoom});")),
                "{} should use zoom {zoom}",
                entry.key
            );
        }
        assert!(!render_at("neshan").contains("zoom: 15"));
    }

    #[test]
    fn placeholders_appear_by_default() {
        let cases = [
            ("google", "YOUR_GOOGLE_API_KEY"),
            ("cedarmaps", "YOUR_CEDAR_ACCESS_TOKEN"),
            ("neshan", "YOUR_NESHAN_API_KEY"),
            ("mapir", "YOUR_MAPIR_ACCESS_TOKEN"),
            ("parsimap", "YOUR_PARSIMAP_KEY"),
            ("mapbox", "YOUR_MAPBOX_ACCESS_TOKEN"),
            ("bing", "YOUR_BING_MAPS_KEY"),
            ("yandex", "YOUR_YANDEX_API_KEY"),
        ];
        for (provider, placeholder) in cases {
            assert!(render_at(provider).contains(placeholder), "{provider}");
        }
        assert!(!render_at("osm").contains("YOUR_"));
    }

    #[test]
    fn configured_credentials_replace_placeholders() {
        let credentials = Credentials::default()
            .with(ProviderKey::Google, "AIzaTest")
            .and_then(|c| c.with(ProviderKey::CedarMaps, "cedar-test"))
            .unwrap();

        let google = render_with(&credentials, 1.0, 2.0, "google").into_string();
        assert!(google.contains("js?key=AIzaTest&callback=initMap"));
        assert!(!google.contains("YOUR_GOOGLE_API_KEY"));

        let cedar = render_with(&credentials, 1.0, 2.0, "cedarmaps").into_string();
        assert_eq!(cedar.matches("cedar-test").count(), 2);
    }

    #[test]
    fn script_breaking_credential_never_reaches_markup() {
        let attack = "x'></script><script>alert(document.cookie)</script><x a='";
        let mut credentials = Credentials::default();
        assert!(credentials.set(ProviderKey::Google, attack).is_err());

        let html = render_with(&credentials, 1.0, 2.0, "google").into_string();
        assert!(!html.contains("alert(document.cookie)"));
        assert!(html.contains("js?key=YOUR_GOOGLE_API_KEY&callback=initMap"));
        assert_eq!(html.matches("<script").count(), 2);
    }

    #[test]
    fn coordinates_pass_through_unvalidated() {
        let html = render(123.5, -400.25, "osm").into_string();
        assert!(html.contains("[123.5, -400.25]"));

        let html = render(f64::NAN, f64::INFINITY, "yandex").into_string();
        assert!(html.contains("[NaN, Infinity]"));
    }

    #[test]
    fn infinities_render_as_js_literals() {
        let html = render(f64::NEG_INFINITY, 1.0, "osm").into_string();
        assert!(html.contains("setView([-Infinity, 1], 15)"));
        assert!(!html.contains("inf,"));

        let html = render(2.0, f64::INFINITY, "mapbox").into_string();
        assert!(html.contains("center: [Infinity, 2]"));

        let html = render(f64::INFINITY, f64::NEG_INFINITY, "bing").into_string();
        assert!(html.contains("Location(Infinity, -Infinity)"));
    }

    #[test]
    fn concurrent_renders_match_sequential_results() {
        let inputs: Vec<(f64, f64, &str)> = list_providers()
            .iter()
            .enumerate()
            .map(|(i, entry)| (i as f64 * 1.5 - 7.0, 100.0 - i as f64 * 3.25, entry.key))
            .chain([(0.5, 0.5, "foo"), (-33.9, 151.2, "")])
            .collect();

        let expected: Vec<_> = inputs
            .iter()
            .map(|&(lat, lon, provider)| render(lat, lon, provider))
            .collect();

        let actual: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|&(lat, lon, provider)| scope.spawn(move || render(lat, lon, provider)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(actual, expected);
    }
}
