/// Build a small measurement info and run the MNE selection functions on it
///
/// Usage: RUST_LOG=debug cargo run --example pick_channels
use fiff_info::{
    pick_channels, ChannelInfo, CoordTrans, InfoBase, MegPick, PickOptions, PickTypes,
    FIFFV_COORD_DEVICE, FIFFV_COORD_HEAD, FIFFV_EEG_CH, FIFFV_MEG_CH, FIFFV_STIM_CH,
    FIFF_UNIT_NONE, FIFF_UNIT_T, FIFF_UNIT_T_M, FIFF_UNIT_V,
};

fn main() -> fiff_info::Result<()> {
    env_logger::init();

    let mut chs = Vec::new();
    for i in 1..=3 {
        chs.push(ChannelInfo::new(format!("MEG 01{}1", i), FIFFV_MEG_CH, FIFF_UNIT_T));
        chs.push(ChannelInfo::new(format!("MEG 01{}2", i), FIFFV_MEG_CH, FIFF_UNIT_T_M));
    }
    chs.push(ChannelInfo::new("EEG 001", FIFFV_EEG_CH, FIFF_UNIT_V));
    chs.push(ChannelInfo::new("EEG 002", FIFFV_EEG_CH, FIFF_UNIT_V));
    chs.push(ChannelInfo::new("STI 014", FIFFV_STIM_CH, FIFF_UNIT_NONE));

    let info = InfoBase::from_channels(chs)
        .with_dev_head_t(CoordTrans::identity(FIFFV_COORD_DEVICE, FIFFV_COORD_HEAD))
        .with_bads(["MEG 0121", "EEG 002"]);

    println!("Measurement info: {} channels", info.nchan);
    println!("  dev_head_t: {}", info.dev_head_t.description());
    println!("  bads: {}", info.bads_string());
    println!();

    let sel = pick_channels(&info.ch_names, &PickOptions::new().exclude(["STI 014"]));
    println!("pick_channels (exclude STI 014): {:?}", sel);

    let grads = info.pick_types(&PickTypes::new().meg(MegPick::Grad));
    println!("pick_types (grad): {:?}", grads);

    let good = info.pick_types(&PickTypes::new().eeg(true).stim(true).exclude_bads(true));
    println!("pick_types (meg+eeg+stim, no bads): {:?}", good);

    let picked = info.pick_info(Some(good.as_slice()))?;
    println!();
    println!("Picked info: {} channels", picked.nchan);
    for (i, ch) in picked.chs.iter().enumerate() {
        println!("  {}: {} ({})", i, ch.ch_name, ch.type_name());
    }
    println!("  bads after pick: {:?}", picked.bads);

    Ok(())
}
