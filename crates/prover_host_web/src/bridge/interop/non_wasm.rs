use prover_host::NewFileRequest;

fn unsupported() -> String {
    "Prover backend transport is only available when compiled for wasm32".to_string()
}

pub async fn get_text(_url: &str) -> Result<String, String> {
    Err(unsupported())
}

pub async fn post_form(_url: &str, _body: &str) -> Result<String, String> {
    Err(unsupported())
}

pub async fn post_new_file(_url: &str, _request: &NewFileRequest) -> Result<String, String> {
    Err(unsupported())
}

pub async fn post_empty(_url: &str) -> Result<String, String> {
    Err(unsupported())
}
