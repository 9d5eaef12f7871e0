pub mod api_response;
pub mod app_error;
pub mod parsed_path;
pub mod parsed_query;
pub mod store_error_codes;
pub mod validated_wrapper;
