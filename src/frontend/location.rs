use super::tracking::use_hover_intent;
use crate::widgets::{Coordinates, CursorVariant, LocationError, LocationStatus};
use gloo_net::http::Request;
use js_sys::{Function, Reflect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Geolocation};
use yew::prelude::*;

const IP_ENDPOINT: &str = "/api/ip";
const LOCATION_ENDPOINT: &str = "/api/location";

#[derive(Deserialize)]
struct VisitorIpResponse {
    ip: String,
}

#[derive(Serialize)]
struct LocationReport {
    latitude: f64,
    longitude: f64,
}

async fn fetch_visitor_ip() -> Result<String, gloo_net::Error> {
    let response = Request::get(IP_ENDPOINT).send().await?;
    let payload = response.json::<VisitorIpResponse>().await?;
    Ok(payload.ip)
}

/// Looks up the visitor address once; the page works the same without it.
pub fn report_visitor_ip() {
    spawn_local(async {
        match fetch_visitor_ip().await {
            Ok(ip) => log::info!("visitor ip: {ip}"),
            Err(error) => log::error!("failed to fetch visitor ip: {error}"),
        }
    });
}

async fn submit_location(coordinates: Coordinates) -> Result<(), gloo_net::Error> {
    let response = Request::post(LOCATION_ENDPOINT)
        .json(&LocationReport {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })?
        .send()
        .await?;

    if !response.ok() {
        log::warn!("location report rejected with status {}", response.status());
    }

    Ok(())
}

fn platform_geolocation() -> Option<Geolocation> {
    let navigator: JsValue = window()?.navigator().into();
    let geolocation = Reflect::get(&navigator, &JsValue::from_str("geolocation")).ok()?;

    if geolocation.is_undefined() || geolocation.is_null() {
        return None;
    }

    Some(geolocation.unchecked_into())
}

fn read_number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
}

fn coordinates_from_position(position: &JsValue) -> Option<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(Coordinates {
        latitude: read_number(&coords, "latitude")?,
        longitude: read_number(&coords, "longitude")?,
    })
}

fn platform_error_message(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "erro desconhecido".to_string())
}

/// One-shot position request. Every call is independent of earlier ones.
fn request_location(on_result: Callback<Result<Coordinates, LocationError>>) {
    let Some(geolocation) = platform_geolocation() else {
        on_result.emit(Err(LocationError::Unsupported));
        return;
    };

    let on_success = {
        let on_result = on_result.clone();
        Closure::once_into_js(move |position: JsValue| {
            let result = coordinates_from_position(&position).ok_or_else(|| {
                LocationError::Platform("posição sem coordenadas".to_string())
            });
            on_result.emit(result);
        })
    };
    let on_error = {
        let on_result = on_result.clone();
        Closure::once_into_js(move |error: JsValue| {
            on_result.emit(Err(LocationError::Platform(platform_error_message(&error))));
        })
    };

    if let Err(error) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref::<Function>(),
        Some(on_error.unchecked_ref::<Function>()),
    ) {
        on_result.emit(Err(LocationError::Platform(platform_error_message(&error))));
    }
}

#[function_component(LocationButton)]
pub fn location_button() -> Html {
    let status = use_state(LocationStatus::default);
    let hover = use_hover_intent(CursorVariant::Link);

    let onclick = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(LocationStatus::Pending);

            let status = status.clone();
            request_location(Callback::from(
                move |result: Result<Coordinates, LocationError>| {
                    match &result {
                        Ok(coordinates) => {
                            log::info!(
                                "location obtained: lat {}, lon {}",
                                coordinates.latitude,
                                coordinates.longitude
                            );
                            let coordinates = *coordinates;
                            spawn_local(async move {
                                if let Err(error) = submit_location(coordinates).await {
                                    log::error!("failed to report location: {error}");
                                }
                            });
                        }
                        Err(error) => log::warn!("{error}"),
                    }
                    status.set(LocationStatus::from_result(result));
                },
            ));
        })
    };

    let label = if status.is_pending() {
        "A obter localização..."
    } else {
        "Partilhar Localização Precisa"
    };

    html! {
        <div class="location-card">
            <button
                class="location-button"
                type="button"
                aria-busy={status.is_pending().to_string()}
                {onclick}
                onmouseenter={hover.enter}
                onmouseleave={hover.leave}
            >
                <span aria-hidden="true">{"⌖"}</span>
                <span>{label}</span>
            </button>

            if let Some(coordinates) = status.coordinates() {
                <div class="location-result" role="status">
                    <p class="location-success">{"Localização obtida com sucesso!"}</p>
                    <p>{format!("Latitude: {}", coordinates.latitude)}</p>
                    <p>{format!("Longitude: {}", coordinates.longitude)}</p>
                </div>
            }

            if let Some(message) = status.error_message() {
                <div class="location-result" role="alert">
                    <p class="location-error">{message}</p>
                </div>
            }
        </div>
    }
}
