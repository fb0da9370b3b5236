//! LC / IQ 校准与温度补偿

use log::{debug, warn};

use crate::{
    device::{CALIB_INTERVAL, Flags, Softc},
    err::Result,
    fw,
    io::get_field,
    osal::Work,
    reg::*,
};

/// 温度变化超过该值时重新校准
const CALIB_THRESHOLD: u8 = 2;

impl Softc {
    /// LC 校准，只用于 RTL8812AU
    pub(crate) fn lc_calib(&mut self) -> Result {
        debug!("LC calibration started");
        let io = &self.io;
        // 连续发送模式下 BB 会在下一个包到来前自行停止发送
        let cont_tx = io.read8(BB_SINGLETONE_CONT_TX + 2) & 0x07 != 0;
        if !cont_tx {
            io.write8(TXPAUSE, TX_QUEUE_ALL)?;
        }

        self.chip.rf_setbits(io, 0, RF_LCK, 0, RF_LCK_ENABLE)?;
        let chnlbw = self.chip.rf_read(io, 0, RF_CHNLBW);
        io.rf_write(0, RF_CHNLBW, chnlbw | RF_CHNLBW_LCSTART)?;
        io.delay(150_000);
        self.chip.rf_setbits(io, 0, RF_LCK, RF_LCK_ENABLE, 0)?;

        if !cont_tx {
            io.write8(TXPAUSE, 0)?;
        }
        io.rf_write(0, RF_CHNLBW, chnlbw)?;
        debug!("LC calibration finished");
        Ok(())
    }

    fn iq_calib_fw_supported(&self) -> bool {
        self.flags.contains(Flags::FW_LOADED) && self.fwver == self.chip.params().fw_iqk_ver
    }

    /// 由固件完成 IQ 校准，完成时固件发回 C2H 报告
    pub(crate) fn iq_calib(&mut self) {
        if !self.iq_calib_fw_supported() {
            debug!("IQ calibration without firmware support is not implemented");
            return;
        }
        if self.flags.contains(Flags::IQK_RUNNING) {
            return;
        }
        debug!("starting IQ calibration (firmware)");
        let c = self.curchan;
        let cmd = fw::iq_calib(
            c.num,
            c.is_5ghz(),
            c.is_ht40(),
            self.rom.ext_pa_5g,
            self.rom.ext_lna_5g,
        );
        match self.fw_cmd(CMD_IQ_CALIBRATE, &cmd) {
            Ok(()) => self.flags.insert(Flags::IQK_RUNNING),
            Err(e) => debug!("error while sending IQ calibration command to firmware: {e}"),
        }
    }

    /// 两次调用完成一次测量：第一次启动温度计，第二次读取结果
    pub(crate) fn temp_calib(&mut self) -> Result {
        if !self.flags.contains(Flags::TEMP_MEASURED) {
            debug!("start measuring temperature");
            self.io.rf_write(0, RF_T_METER, RF_T_METER_START)?;
            self.flags.insert(Flags::TEMP_MEASURED);
            return Ok(());
        }
        self.flags.remove(Flags::TEMP_MEASURED);

        let temp = get_field(self.chip.rf_read(&self.io, 0, RF_T_METER), RF_T_METER_VAL_M) as u8;
        if temp == 0 {
            debug!("temperature read failed, skipping");
            return Ok(());
        }
        debug!("temperature: previous {}, current {temp}", self.thcal_temp);

        if self.thcal_temp == 0xff {
            // EFuse 中没有基准温度
            if self.chip.is_12a() {
                self.lc_calib()?;
            }
            self.thcal_temp = temp;
        } else if temp.abs_diff(self.thcal_temp) > CALIB_THRESHOLD {
            debug!("LC/IQ calibration triggered by temperature: {} -> {temp}", self.thcal_temp);
            if self.chip.is_12a() {
                self.lc_calib()?;
            }
            self.iq_calib();
            self.thcal_temp = temp;
        }
        Ok(())
    }

    /// 周期校准，仍有连接时继续调度
    pub(crate) fn calib_cb(&mut self) {
        if let Err(e) = self.temp_calib() {
            warn!("temperature calibration failed: {e}");
        }
        if self.io.read8(MSR) & MSR_MASK != MSR_NOLINK {
            self.io.kernel().schedule(Work::Calibration, CALIB_INTERVAL);
        }
    }
}
