use std::io::Read;
use std::path::Path;
use std::sync::{Arc, RwLock};
use std::thread;

use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use pun::{fresh_rng, load_config, Pun, PunContext};

#[derive(Deserialize)]
struct PunRequest {
    phrase: String,
    #[serde(default)]
    top_k: Option<usize>,
}

#[derive(Serialize)]
struct PunResponse {
    pun: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type SharedContext = Arc<RwLock<Option<Arc<PunContext>>>>;

fn json_response(body: String, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_string(body).with_status_code(StatusCode(status));
    response.add_header(Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap());
    response
}

fn error_response(message: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string(&ErrorResponse {
        error: message.to_string(),
    })
    .unwrap_or_default();
    json_response(body, status)
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(Path::new("pun.json"));
    let default_top_k = config.top_k;

    // The context loads in the background; requests are rejected with 503
    // until the slot is filled. This is the readiness signal.
    let ctx: SharedContext = Arc::new(RwLock::new(None));
    let slot = Arc::clone(&ctx);
    let loader_config = config.clone();
    thread::spawn(move || match PunContext::load(&loader_config) {
        Ok(loaded) => {
            *slot.write().unwrap() = Some(Arc::new(loaded));
            log::info!("ready to serve puns");
        }
        Err(e) => log::error!("could not load the pun context: {}", e),
    });

    let server = match Server::http(&config.bind_addr) {
        Ok(s) => s,
        Err(e) => {
            log::error!("failed to bind server: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("server bind error: {}", e),
            ));
        }
    };
    log::info!("server running on http://{}", config.bind_addr);

    for request in server.incoming_requests() {
        let ctx = Arc::clone(&ctx);
        let mut req = request;
        // one thread per request, so a slow generation never blocks /health
        thread::spawn(move || {
            let url = req.url().to_string();
            let method = req.method().clone();

            if method == Method::Get && url == "/health" {
                let _ = req.respond(Response::from_string("OK"));
                return;
            }

            if method == Method::Get && url == "/ready" {
                let loaded = ctx.read().unwrap().is_some();
                let response = if loaded {
                    Response::from_string("ready")
                } else {
                    Response::from_string("loading").with_status_code(StatusCode(503))
                };
                let _ = req.respond(response);
                return;
            }

            if method == Method::Post && url == "/pun" {
                let Some(ctx) = ctx.read().unwrap().clone() else {
                    let _ = req.respond(error_response("model still loading", 503));
                    return;
                };

                let mut content = String::new();
                if req.as_reader().read_to_string(&mut content).is_err() {
                    let _ = req.respond(error_response("unreadable body", 400));
                    return;
                }
                let Ok(pun_req) = serde_json::from_str::<PunRequest>(&content) else {
                    let _ = req.respond(error_response("bad request", 400));
                    return;
                };

                let top_k = pun_req.top_k.unwrap_or(default_top_k);
                let mut rng = fresh_rng();
                let response = match ctx.generate(&pun_req.phrase, top_k, &mut rng) {
                    Pun::Text(text) => {
                        let body = serde_json::to_string(&PunResponse { pun: text })
                            .unwrap_or_default();
                        json_response(body, 200)
                    }
                    Pun::Apology(message) => {
                        let body = serde_json::to_string(&PunResponse {
                            pun: message.to_string(),
                        })
                        .unwrap_or_default();
                        json_response(body, 200)
                    }
                    Pun::NoCandidates => error_response("no candidates", 422),
                };
                let _ = req.respond(response);
                return;
            }

            let _ = req.respond(Response::from_string("Not Found").with_status_code(StatusCode(404)));
        });
    }

    Ok(())
}
