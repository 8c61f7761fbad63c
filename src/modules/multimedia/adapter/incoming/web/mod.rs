pub mod multipart_form;
pub mod routes;
