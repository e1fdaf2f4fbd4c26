fn main() {
    snmpd_operator::app::cli::run();
}
