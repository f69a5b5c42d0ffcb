use streams_addons::app::startup::startup;

fn main() {
    std::process::exit(startup());
}
