// Each submodule needs either nothing (connection_test) or a broker at
// AMQP_ADDR (receive_test, ignored by default).

mod connection_test;
mod receive_test;
