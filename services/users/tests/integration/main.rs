mod concurrency_test;
mod router_test;
