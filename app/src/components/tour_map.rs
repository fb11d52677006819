use crate::api::{TourDto, get_tour, translate_description};
use crate::languages::{LANGUAGES, label_for};
use crate::map_view::{MAP_CONTAINER_ID, MapView};
use crate::navigation::NavigationCommand;
use crate::tour::{TranslationOutcome, start_tour};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TourPage() -> impl IntoView {
    let tour_resource = Resource::new(|| (), |()| async { get_tour().await });

    view! {
        <div class="space-y-4">
            <div>
                <h1 class="page-title">"A Tour of India"</h1>
                <p class="page-subtitle">
                    "Use the buttons or the left and right arrow keys to move between stops. Click the guide to translate."
                </p>
            </div>

            <Suspense fallback=move || view! { <p class="loading">"Loading tour..."</p> }>
                {move || {
                    tour_resource
                        .get()
                        .map(|result| match result {
                            Ok(tour) => view! { <TourMap tour=tour/> }.into_any(),
                            Err(e) => {
                                view! { <p class="text-danger">"Error: " {e.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TourMap(tour: TourDto) -> impl IntoView {
    let (stops, initial) = match start_tour(tour.stops, &tour.source_language) {
        Ok(started) => started,
        Err(e) => {
            return view! { <p class="text-danger">{e.to_string()}</p> }.into_any();
        }
    };
    let stops = StoredValue::new(stops);
    let settings = StoredValue::new(tour.map);
    let (state, set_state) = signal(initial);

    // Responses are handed back to the state, which drops them if the user
    // has moved on.
    let request_translation = move || {
        let Some(request) =
            stops.with_value(|stops| state.with_untracked(|s| s.begin_translation(stops)))
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = translate_description(
                request.ticket.stop_index(),
                request.ticket.language().to_string(),
            )
            .await;
            // Only an applied translation changes what is shown, so the other
            // outcomes do not notify subscribers.
            let outcome = set_state
                .try_update_untracked(|s| s.complete_translation(&request.ticket, result));
            match outcome {
                Some(TranslationOutcome::Applied) => set_state.notify(),
                Some(TranslationOutcome::Failed(e)) => {
                    log::warn!("Translation failed: {e}");
                }
                Some(TranslationOutcome::Discarded) => {
                    log::debug!(
                        "Discarded stale translation for stop {}",
                        request.ticket.stop_index()
                    );
                }
                None => {}
            }
        });
    };

    // The component body runs once per mount, so this is registered once and
    // removed on unmount. The handler reads state through the signal.
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let target_tag = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|element| element.tag_name());
        if let Some(command) = NavigationCommand::from_key_event(&ev.key(), target_tag.as_deref())
        {
            set_state.update(|s| {
                s.apply(command);
            });
        }
    });
    on_cleanup(move || keydown.remove());

    let current_index = Memo::new(move |_| state.with(|s| s.current_index()));
    let popup_html =
        Memo::new(move |_| stops.with_value(|stops| state.with(|s| s.popup_html(stops))));

    // The map lives in the effect's value, so it is mounted on first run and
    // dropped (unmounted) together with the effect. It only moves when the
    // stop changes; language changes and translations just replace the popup.
    Effect::new(move |prev: Option<Option<MapView>>| {
        let mut map_view = prev.flatten();
        let index = current_index.get();
        let Some(center) = stops.with_value(|stops| stops.get(index).map(|stop| stop.coordinates))
        else {
            return map_view;
        };
        match map_view.as_mut() {
            Some(view) => {
                view.focus(index, center);
            }
            None => {
                map_view = Some(settings.with_value(|settings| {
                    MapView::mount(settings, index, center, request_translation)
                }));
            }
        }
        if let Some(view) = &map_view {
            popup_html.with(|html| view.set_popup(html));
        }
        map_view
    });

    let stop_name = move || {
        stops.with_value(|stops| {
            state.with(|s| {
                s.current_stop(stops)
                    .map(|stop| stop.name.clone())
                    .unwrap_or_default()
            })
        })
    };
    let display_text = move || stops.with_value(|stops| state.with(|s| s.display_text(stops)));
    let position = move || state.with(|s| s.position_label());
    let translate_label = move || {
        state.with(|s| {
            let language = s.language();
            format!("Translate to {}", label_for(language).unwrap_or(language))
        })
    };

    view! {
        <div class="card space-y-4">
            <div class="form-row">
                <label for="language" class="form-label">"Choose Language:"</label>
                <select
                    id="language"
                    class="form-select"
                    prop:value=move || state.with(|s| s.language().to_string())
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        set_state.update(|s| s.select_language(code));
                    }
                >
                    {LANGUAGES
                        .iter()
                        .map(|lang| view! { <option value=lang.code>{lang.label}</option> })
                        .collect_view()}
                </select>
            </div>

            <div id=MAP_CONTAINER_ID class="tour-map"></div>

            <div class="caption">
                <h2 class="caption-title">{stop_name}</h2>
                <p class="caption-text">{display_text}</p>
                <button type="button" class="btn-secondary btn-sm" on:click=move |_| request_translation()>
                    {translate_label}
                </button>
            </div>

            <div class="nav-row">
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| {
                        set_state.update(|s| {
                            s.previous_stop();
                        });
                    }
                >
                    "Previous"
                </button>
                <span class="badge-neutral">{position}</span>
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| {
                        set_state.update(|s| {
                            s.next_stop();
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
    .into_any()
}
