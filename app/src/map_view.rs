//! Binding to the Leaflet shim in `public/assets/tour_map.js`.
//!
//! The shim owns the map, the tile layer and the single marker. Rust only
//! tells it where to look and what the popup says, and receives marker
//! clicks through a closure that lives as long as the [`MapView`].

use crate::config::MapSettings;
use crate::stops::Coordinates;

pub const MAP_CONTAINER_ID: &str = "tour-map";
pub const POPUP_MAX_WIDTH: u32 = 300;

#[cfg(target_arch = "wasm32")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = tourMapMount)]
        pub fn mount(
            container_id: &str,
            tile_url: &str,
            latitude: f64,
            longitude: f64,
            zoom: u8,
            popup_max_width: u32,
            on_marker_click: &Closure<dyn FnMut()>,
        );

        #[wasm_bindgen(js_name = tourMapFocus)]
        pub fn focus(latitude: f64, longitude: f64, zoom: u8);

        #[wasm_bindgen(js_name = tourMapSetPopup)]
        pub fn set_popup(popup_html: &str);

        #[wasm_bindgen(js_name = tourMapUnmount)]
        pub fn unmount();
    }
}

/// A mounted map. Dropping it tears the map down and releases the
/// marker-click closure.
pub struct MapView {
    zoom: u8,
    focused_stop: usize,
    #[cfg(target_arch = "wasm32")]
    _on_marker_click: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

impl MapView {
    /// Mount centered on `center`, the position of stop `stop_index`.
    #[cfg(target_arch = "wasm32")]
    pub fn mount(
        settings: &MapSettings,
        stop_index: usize,
        center: Coordinates,
        on_marker_click: impl FnMut() + 'static,
    ) -> Self {
        use wasm_bindgen::closure::Closure;

        let on_marker_click = Closure::<dyn FnMut()>::new(on_marker_click);
        ffi::mount(
            MAP_CONTAINER_ID,
            &settings.tile_url,
            center.latitude,
            center.longitude,
            settings.zoom,
            POPUP_MAX_WIDTH,
            &on_marker_click,
        );
        Self {
            zoom: settings.zoom,
            focused_stop: stop_index,
            _on_marker_click: on_marker_click,
        }
    }

    /// Without a browser there is nothing to draw.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn mount(
        settings: &MapSettings,
        stop_index: usize,
        _center: Coordinates,
        _on_marker_click: impl FnMut() + 'static,
    ) -> Self {
        Self {
            zoom: settings.zoom,
            focused_stop: stop_index,
        }
    }

    pub fn focused_stop(&self) -> usize {
        self.focused_stop
    }

    /// Move the view and marker to stop `stop_index`. The view is left alone
    /// (keeping any zoom or pan by the user) when that stop is already
    /// focused. Returns whether the map moved.
    pub fn focus(&mut self, stop_index: usize, center: Coordinates) -> bool {
        if self.focused_stop == stop_index {
            return false;
        }
        self.focused_stop = stop_index;

        #[cfg(target_arch = "wasm32")]
        ffi::focus(center.latitude, center.longitude, self.zoom);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (center, self.zoom);

        true
    }

    /// Replace the popup content. `popup_html` must already be escaped.
    pub fn set_popup(&self, popup_html: &str) {
        #[cfg(target_arch = "wasm32")]
        ffi::set_popup(popup_html);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = popup_html;
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        ffi::unmount();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    const DELHI: Coordinates = Coordinates {
        latitude: 28.6139,
        longitude: 77.209,
    };
    const MUMBAI: Coordinates = Coordinates {
        latitude: 19.076,
        longitude: 72.8777,
    };

    #[test]
    fn test_focus_same_stop_keeps_view() {
        let mut map = MapView::mount(&MapSettings::default(), 0, DELHI, || {});
        assert!(!map.focus(0, DELHI));
        assert_eq!(map.focused_stop(), 0);
    }

    #[test]
    fn test_focus_moves_on_stop_change() {
        let mut map = MapView::mount(&MapSettings::default(), 0, DELHI, || {});
        assert!(map.focus(1, MUMBAI));
        assert_eq!(map.focused_stop(), 1);
        assert!(!map.focus(1, MUMBAI));
        assert!(map.focus(0, DELHI));
    }
}
