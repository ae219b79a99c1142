error_chain! {
    errors {
        InvalidEnzymeSpec(name: String, reason: String) {
            description("invalid enzyme specification")
            display("invalid enzyme {:?}: {}", name, reason)
        }

        UnknownEnzyme(name: String) {
            description("unknown enzyme")
            display("unknown enzyme {:?}", name)
        }

        DuplicateEnzyme(name: String) {
            description("duplicate enzyme")
            display("enzyme {:?} is defined more than once", name)
        }
    }
}
