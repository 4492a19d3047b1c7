use serde_json::json;
use std::fmt;

use twiglet::init::init_logger;

const PORT: u16 = 8080;

#[derive(Debug)]
struct LoginError;

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Oh noes!")
    }
}

impl std::error::Error for LoginError {}

fn login() -> Result<(), LoginError> {
    Err(LoginError)
}

fn main() -> twiglet::Result<()> {
    let log = init_logger("petshop")?;

    log.info(json!({
        "event": {"action": "startup"},
        "message": format!("Ready to go, listening on port {PORT}"),
        "server": {"port": PORT},
    }))?;

    // Every record from this logger carries the request's trace id.
    let request_log = log.with(json!({
        "event": {"action": "HTTP request"},
        "trace": {"id": "126bb6fa-28a2-470f-b013-eefbf9182b2d"},
    }))?;

    request_log.error(json!({"message": "DB connection failed."}))?;

    if let Err(err) = login() {
        request_log.error_with(json!({"message": "Failed during customer login"}), &err)?;
    }

    request_log.info(json!({
        "message": "Internal Server Error",
        "http": {"request": {"method": "get"}, "response": {"status_code": 500}},
    }))?;

    // Empty messages are rejected rather than written.
    if let Err(err) = log.debug("") {
        eprintln!("refused to log: {err}");
    }

    Ok(())
}
