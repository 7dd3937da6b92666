mod health_test;
mod patients_test;
