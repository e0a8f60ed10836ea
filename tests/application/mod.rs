mod intake_service_test;
