pub mod lead_csv;
mod llama_completion_http;
mod serpapi_lookup_http;

pub use llama_completion_http::HttpLlamaCompletion;
pub use serpapi_lookup_http::HttpSerpApiLookup;
