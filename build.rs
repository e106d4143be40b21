fn main() {
    slint_build::compile("ui/app-window.slint").expect("Slint UI failed to compile");
}
