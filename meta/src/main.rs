fn main() {
    multiversx_sc_meta_lib::cli_main::<smart_voting::AbiProvider>();
}
