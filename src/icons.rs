//! Base64-encoded template PNGs for the five trend arrow glyphs. The host
//! decodes `templateImage=` payloads itself, so these stay opaque strings.

pub const RISING: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAB9ElEQVRYR8WXvzIEQRDGf/s8PAS5kCoJCREREdG5iIiIiIREIJTzEDzPqd6a2Zqb7e7pXapscrWz3V9/8/Wfmes6xs8KkHX5bT3ZP9tmv3pdcGpMee+igVpEtO8tEj2B2jFCKNlcATvJ/x2Qd/XxMLUMROSXYItK1qVHwlJIJZCNtZxJkFUKroC6JDQl1BqwJOuc4IXPiMTkFBipHGQPFKSphKFqE1LybRaZRbiDpdfKahco/doHV/PXnhVCWtQwH7cIU6VrO98HXitUbU1MXBIegZHsSYVD4EXZvHw+AJ6V7fYkLBU1eaycHwNPyaFOb97MEfBokdAGX79WsLOq/RR4KAAsAoJ1soJ7a06USmhz4AvYqJzPgbtqbY1Al8Z6sXgG3FayfwObJY5WAx/AVmF0Cdwo09FUoPC9AK6L909gWyVQpWA3Gb05/e8SKPAWHewl4xHeoEDrFFS+qwRaOGYRNmfh2CCSgiaseSHJO3F25HVB6DaVu6/J0jD4OwLaCRW4D/5NCuZsPxEOdUGrKFuHkcevJ1AEmIU1y6lxFoREHYo8MwjkfACOpCDEIl/LW3mqpM7Yk4rQivFvKSjPFletOYMoKv/aIIqkoQIuT821U24K1m9SIBeXyKlp/tOS4CMCU9hPlVrrNFWBKAnPzmvv8tsPvhOFJq54RKYAAAAASUVORK5CYII=";

pub const RISING_SLIGHTLY: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAACOElEQVRYR62WW2oVQRCGv16MTy5C3UNIFI3ESFQULySYiJJEFMULihcUNUTFJJiAO/DBvGUDPrqXkR6mD911qqu7h8zLOdNTXfVX/X9Vt+MYHwd0ir94Xdr496on5zxsrgmuBaoGEG8uganKaDBKAIx1PGZf2NMD0HjRuBxAPwROAacbMz0CNoHfse8xFPwFTo7JGvgHnJCibEnE2/6pyd4AmFR9UoHwxyh9AOopmPFVsJAbrefiWFkKLF0Uyj8LHBjgkqSrNNDA91ngZ2E2THVeqwYm9gLYeWA3N2wiansKwnvyorVkJbp54IdiOxfTMQRur0BOoIPDBeCbEvwcsO+gE8JOATTwO1V6B4sdbCvBLwB7w7psrJSC0mFiULAEfFG+XwR2ovUpAPJcSXzkKiLWrwKfFNtLwHex3gOI1sZpIErjOvBByfwy8FURclsFrE5wcLODd8qQutLBVoYuWwMlEUbfbwNvFM1cAz4bfuKz4xA4o2qgAGQZeKXY3AA+FmZFODu82S/AvycdVZo1d4EXitEt4H2pi7TEwpr/Nc8CB2sdPFOC3wHexsH9/8l4VS6n1jDLVeC+gyeKhFc6eF3K3BJzDQXrwCMF2SrwUq5bR3cJqEaBF4m/u8kBda+D5yXBhMyDna9gTgfSNuzR7nwPgKe54FYH1bS59CvvfBvA45rMxwKU+8y+PQ4gyYWkxaFspRrxlfz3Pks8xTY1tlZQLYkSyOrvsrQVV/z8JIz7s8ZRNUph+B+Na5Ek1BPc9gAAAABJRU5ErkJggg==";

pub const FLAT: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAB6klEQVRYR62XIXrDMAyF/5ynY7tADzEwNjg2VFTSBhQNjQ2O7QLlvcBo71KWfe7sfKojWUrWsNSx9PT89OR2LHg6YHD2ad9Yvy2A4G+5K4AULD1e1RLWXQHU9dbBo8lSHG2vyWfkrIE98NTBZYBjercAar8Xdv1DFV9UgU7AWiz3GVQoZgiAw8QP8Fhl6zvYS81YOhoBBOmenCGwq5NlME0mSr4QA5Z4RIXbDg5Kl7ggJgBaTDhrmwHeFbBJpAmI+ixmwIj3Bnwoa6kz+sKQ1IMLQJ5VCiA3GMb0CnxqIDQmXABeLxnH8gJ8RUDcAIg4nCbI2oKzbT8D3x4ICeDqaMBqYdXeNrk+docEcOpgHRk4Vjd4XiLWz8BDYbMgqy11UpHlZt6xKMPsPCgAylBZRViYw3dLB6EuaFGeBafhsUR4444hACV67QkNFsY2rMBPkl8BzBDPTU5jn2VE6lyYxUDNhPI+WrFXeW3LkcrUb0SiDXkYVcaUZkAS+PjIo3QZCLrjFjgomnBvRyoArd8bOknV7ZYkH41oqbPlpO6VrCXyrkWx1x0ZQOhS6nmJ2dKe/aYb8PA3xC7A0bgfXuPLWFKIrqtq6IPshGKP6P4zAyymmudf3bBme4FbntH72v+FCQseco+tlnYk8F+7xpQmAJKjtQAAAABJRU5ErkJggg==";

pub const FALLING_SLIGHTLY: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAACUUlEQVRYR72WzU4VQRCFv34e2eED8BAGIhKNhp9oQIMS0Sg/AYxoBIIajUogENC4dw/sZclT8ALshvTQc+mpqe6pUePd3Z7TVadOna5ux3/+OaCIcrrGggDk+Mm9GrYNUyOggf2a/8Ws/5VoPnYVv1PMlGpt1aYUKllEFS4CN4BzB7+ARVl9SqkK16WtpQJiwyEwELGdB5Y7SWQAVzkbLXDwu4B+EeOlg1d/6oM4mVSppkAA+hYsKDI/d7CqBdCIWf2QMuEcsKS0ZxZ4q6wbRL+CxORyp+AFsKLINwOsyYxdKq4Nohbqz4DXCuYxsKG5vcJa/WKZA0+BN0qFj4D3XSdljnQu1hPgnQKYAj7G67Jl7nKO+LlyBhz7uSLxvf8tfZx2sK5I+wD4rB21EDieK6dAn0rAaKKHwKaixATwNWHMknNE0HUxodaWSeCD8mEM2JJH1EEhVKv5zmJCOap9jvsOPvnAQrl7wI4gp10lJcTvNRFIuHMc+KK07g6wF+0pBKbxBDBNsYTJRoFvSu9HCjgI60kFShVSF4X/aBwmd4Ft5SgOAz+UMHkPGE+DLPo2sKtIOQT8rNZDbJsJK1TqkSHdDtwC9g39bNzAhj2XEIM6N4HvouKe00MxdgKphC1EBmPZFYP+9SCq3ozXFONl1Yw9EJvf3IIAPHQwkPOGFjBSTTehJmtCavlo7eXTrlpxlE+A6zFOnYQSIKrt3IIQz9+E/h45ig3dIGBwunR1awtzMXsE2kBdXr6GVtTalqzAooZxPmRzJE3Uqm0AWIlq8S4A9OunI0491BEAAAAASUVORK5CYII=";

pub const FALLING: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAACI0lEQVRYR8WXMVZWMRCFvyzAlWCnPRugtaDSTitopNFCKKTBRivpoKKhYwX22MFKXEA8+UnemUwmyYRzPL7uTTIzN3duZt4L/Ocn6PzJEAegZuvPiTfloJP0FNjPzr+A9D58rDg7BvSCfB+c+AHYy/6PEV6W7IXWEZN67wz8ti4A6fjhOeWpNLAYIKr9FQAZOCHtxW5E6KYia1UE7jJQ9lildgMwdNGUwAtex/L6aRorAAGCR3TWNa1sCzpYYuCfaUCgN8s5O1BXAyPhpKSxbZhmT5nV1y1CI9CwBL2uZzr1OteEPlOEVhcdgZmWoNeqUxXUabZYI+BWL5iVqbe+dAt6QSwGypR7AdwBZ50R6wWQ4h0Af4BmajYAAjzEPOVy4s/AeU+E4rbsGpGi+BPwVZTxETE1i13HvgdeKeMJ8E0Fb4aR9AnwMcKFsv2O8FrZmrMlyr4YJz4GfggQIwBHAb4brTmVs/pwqUogrmMFQiT9AFxmcD0NvAd+GgdokvdKUHx7TLwDro1Px4TzLXDlTb4B6DWiTNdWDiG4wwg3JVG2HyJsAsRZULRL6qr+bTWJ+ORsacIzRbu0FxDeWdCAmE253D82wVkteqYBXcoNxGpyVaqGuZ3B2b89IHa0O0BueVdnQQpeaUJ0QLPmVitPtuLnBiBuwWlUIMLTzEj2pceaBd1/Q0VrYuFNznbr+TWzkLlugVMfSyeXwlx29AjMsycl/gt7HJ4j7JEBbgAAAABJRU5ErkJggg==";
