use functional_configuration::demo_things;

fn main() {
    env_logger::init();

    for thing in demo_things() {
        println!("{}", thing);
    }
}
