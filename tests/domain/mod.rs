mod flow_test;
mod sanitize_test;
mod synthesis_test;
mod validation_test;
