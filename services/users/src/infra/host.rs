/// Name of the host serving requests, reported to clients as `server_id`.
pub fn server_id() -> String {
    let name = gethostname::gethostname().to_string_lossy().into_owned();
    if name.is_empty() {
        "unknown".to_owned()
    } else {
        name
    }
}
